//! CLI for the azcog Azure Cognitive Services tools.

mod commands;

use anyhow::Result;
use azcog_core::{config, credentials};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{
    run_bot, run_name, run_sentiment, run_transcribe, run_translate, run_translate_csv,
    run_vision,
};

/// Top-level CLI for azcog.
#[derive(Debug, Parser)]
#[command(name = "azcog")]
#[command(about = "azcog: Azure Cognitive Services batch tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Analyze every image in a folder, write a report, and save renamed copies.
    Vision {
        /// Folder of images (default from config: data/images).
        #[arg(long, value_name = "DIR")]
        input: Option<PathBuf>,
    },

    /// Derive a filename from a saved analysis JSON (no network).
    Name {
        /// Path to an Analyze Image JSON response.
        analysis: PathBuf,

        /// Extension to append, including the dot.
        #[arg(long, default_value = ".jpg")]
        ext: String,

        /// Resolve collisions against the files already in this folder.
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Run sentiment analysis on every .txt file in a folder.
    Sentiment {
        /// Folder of comment_*.txt files.
        #[arg(long, value_name = "DIR")]
        input: Option<PathBuf>,
        /// Folder for sentiment_*.txt results.
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Translate one text and print the service response.
    Translate {
        /// Text to translate.
        text: String,
        /// Source language (default from config: en).
        #[arg(long)]
        from: Option<String>,
        /// Target language; repeat for several (default from config: fr, zu).
        #[arg(long = "to", value_name = "LANG")]
        to: Vec<String>,
    },

    /// Translate one CSV column row by row into a new column.
    TranslateCsv {
        /// Input CSV file.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Output CSV file.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Target language.
        #[arg(long, value_name = "LANG")]
        to: Option<String>,
        /// Source column holding the text.
        #[arg(long, value_name = "NAME")]
        column: Option<String>,
    },

    /// Transcribe every .wav in a folder into each configured language.
    Transcribe {
        /// Folder of .wav files.
        #[arg(long, value_name = "DIR")]
        input: Option<PathBuf>,
        /// Folder for transcription text files.
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Send one message to a bot over Direct Line and print its replies.
    Bot {
        /// Message text.
        #[arg(long, default_value = "Hello from azcog!")]
        message: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        credentials::load_dotenv();

        match cli.command {
            CliCommand::Vision { input } => run_vision(&cfg, input)?,
            CliCommand::Name { analysis, ext, dir } => run_name(&analysis, &ext, dir.as_deref())?,
            CliCommand::Sentiment { input, output } => run_sentiment(&cfg, input, output)?,
            CliCommand::Translate { text, from, to } => run_translate(&cfg, &text, from, to)?,
            CliCommand::TranslateCsv {
                input,
                output,
                to,
                column,
            } => run_translate_csv(&cfg, input, output, to, column)?,
            CliCommand::Transcribe { input, output } => run_transcribe(&cfg, input, output)?,
            CliCommand::Bot { message } => run_bot(&cfg, &message)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
