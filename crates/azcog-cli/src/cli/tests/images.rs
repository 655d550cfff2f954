//! Tests for vision and name subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_vision_defaults() {
    match parse(&["azcog", "vision"]) {
        CliCommand::Vision { input } => assert!(input.is_none()),
        _ => panic!("expected Vision"),
    }
}

#[test]
fn cli_parse_vision_input() {
    match parse(&["azcog", "vision", "--input", "/tmp/pics"]) {
        CliCommand::Vision { input } => {
            assert_eq!(input.as_deref(), Some(Path::new("/tmp/pics")))
        }
        _ => panic!("expected Vision with --input"),
    }
}

#[test]
fn cli_parse_name() {
    match parse(&["azcog", "name", "analysis.json"]) {
        CliCommand::Name { analysis, ext, dir } => {
            assert_eq!(analysis, Path::new("analysis.json"));
            assert_eq!(ext, ".jpg");
            assert!(dir.is_none());
        }
        _ => panic!("expected Name"),
    }
}

#[test]
fn cli_parse_name_ext_and_dir() {
    match parse(&["azcog", "name", "a.json", "--ext", ".png", "--dir", "out"]) {
        CliCommand::Name { ext, dir, .. } => {
            assert_eq!(ext, ".png");
            assert_eq!(dir.as_deref(), Some(Path::new("out")));
        }
        _ => panic!("expected Name with --ext/--dir"),
    }
}

#[test]
fn cli_name_requires_analysis_path() {
    assert!(Cli::try_parse_from(["azcog", "name"]).is_err());
}
