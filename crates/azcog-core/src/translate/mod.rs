//! Azure Translator: single requests and batch CSV translation.

mod client;
pub mod csv_batch;

pub use client::{
    first_translation, to_pretty_json, TextTranslator, TranslateError, TranslatorClient,
    API_VERSION, REGION_HEADER, TRACE_ID_HEADER,
};
pub use csv_batch::{translate_csv, CsvJob, CsvRun};
