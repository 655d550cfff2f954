pub mod config;
pub mod credentials;
pub mod logging;

pub mod bot;
pub mod http;
pub mod naming;
pub mod sentiment;
pub mod speech;
pub mod translate;
pub mod vision;
