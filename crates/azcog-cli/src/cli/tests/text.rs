//! Tests for sentiment, translate, transcribe and bot subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_sentiment() {
    match parse(&["azcog", "sentiment", "--input", "in", "--output", "out"]) {
        CliCommand::Sentiment { input, output } => {
            assert_eq!(input.as_deref(), Some(Path::new("in")));
            assert_eq!(output.as_deref(), Some(Path::new("out")));
        }
        _ => panic!("expected Sentiment"),
    }
}

#[test]
fn cli_parse_translate_defaults() {
    match parse(&["azcog", "translate", "Hello"]) {
        CliCommand::Translate { text, from, to } => {
            assert_eq!(text, "Hello");
            assert!(from.is_none());
            assert!(to.is_empty());
        }
        _ => panic!("expected Translate"),
    }
}

#[test]
fn cli_parse_translate_repeated_targets() {
    match parse(&["azcog", "translate", "Hi there", "--from", "en", "--to", "fr", "--to", "zu"]) {
        CliCommand::Translate { text, from, to } => {
            assert_eq!(text, "Hi there");
            assert_eq!(from.as_deref(), Some("en"));
            assert_eq!(to, vec!["fr".to_string(), "zu".to_string()]);
        }
        _ => panic!("expected Translate with targets"),
    }
}

#[test]
fn cli_parse_translate_csv() {
    match parse(&["azcog", "translate-csv", "--to", "es", "--column", "body"]) {
        CliCommand::TranslateCsv {
            input,
            output,
            to,
            column,
        } => {
            assert!(input.is_none());
            assert!(output.is_none());
            assert_eq!(to.as_deref(), Some("es"));
            assert_eq!(column.as_deref(), Some("body"));
        }
        _ => panic!("expected TranslateCsv"),
    }
}

#[test]
fn cli_parse_transcribe() {
    match parse(&["azcog", "transcribe"]) {
        CliCommand::Transcribe { input, output } => {
            assert!(input.is_none());
            assert!(output.is_none());
        }
        _ => panic!("expected Transcribe"),
    }
}

#[test]
fn cli_parse_bot_default_message() {
    match parse(&["azcog", "bot"]) {
        CliCommand::Bot { message } => assert_eq!(message, "Hello from azcog!"),
        _ => panic!("expected Bot"),
    }
}

#[test]
fn cli_parse_bot_message() {
    match parse(&["azcog", "bot", "--message", "ping"]) {
        CliCommand::Bot { message } => assert_eq!(message, "ping"),
        _ => panic!("expected Bot with --message"),
    }
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["azcog", "download"]).is_err());
}
