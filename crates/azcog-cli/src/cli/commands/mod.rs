//! CLI command handlers, one file per command.

mod bot;
mod name;
mod sentiment;
mod transcribe;
mod translate;
mod translate_csv;
mod vision;

pub use bot::run_bot;
pub use name::run_name;
pub use sentiment::run_sentiment;
pub use transcribe::run_transcribe;
pub use translate::run_translate;
pub use translate_csv::run_translate_csv;
pub use vision::run_vision;
