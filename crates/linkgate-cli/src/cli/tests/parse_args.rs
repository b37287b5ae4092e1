//! Tests for check, filter, links and sample argument parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_check() {
    match parse(&["linkgate", "check", "https://example.com/page"]) {
        CliCommand::Check { url, filter, json } => {
            assert_eq!(url, "https://example.com/page");
            assert!(!filter.strict);
            assert!(!filter.lenient);
            assert!(filter.language.is_none());
            assert!(!filter.with_nav);
            assert!(!filter.redirects);
            assert!(!json);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_all_flags() {
    match parse(&[
        "linkgate",
        "check",
        "https://example.com/page",
        "--strict",
        "--redirects",
        "--language",
        "de",
        "--with-nav",
        "--json",
    ]) {
        CliCommand::Check { url, filter, json } => {
            assert_eq!(url, "https://example.com/page");
            assert!(filter.strict);
            assert!(filter.redirects);
            assert_eq!(filter.language.as_deref(), Some("de"));
            assert!(filter.with_nav);
            assert!(json);
        }
        _ => panic!("expected Check with flags"),
    }
}

#[test]
fn cli_rejects_strict_with_lenient() {
    let result = Cli::try_parse_from([
        "linkgate",
        "check",
        "https://example.com/",
        "--strict",
        "--lenient",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_check_requires_url() {
    assert!(Cli::try_parse_from(["linkgate", "check"]).is_err());
}

#[test]
fn cli_parse_filter_stdin() {
    match parse(&["linkgate", "filter"]) {
        CliCommand::Filter { input, json, .. } => {
            assert!(input.is_none());
            assert!(!json);
        }
        _ => panic!("expected Filter"),
    }
}

#[test]
fn cli_parse_filter_file() {
    match parse(&["linkgate", "filter", "urls.txt", "--lenient", "--json"]) {
        CliCommand::Filter {
            input,
            filter,
            json,
        } => {
            assert_eq!(input, Some(PathBuf::from("urls.txt")));
            assert!(filter.lenient);
            assert!(json);
        }
        _ => panic!("expected Filter with file"),
    }
}

#[test]
fn cli_parse_links() {
    match parse(&[
        "linkgate",
        "links",
        "page.html",
        "--base",
        "https://www.example.org/",
        "--external",
        "--reference",
        "https://example.org",
    ]) {
        CliCommand::Links {
            input,
            base,
            external,
            reference,
            filter,
        } => {
            assert_eq!(input, PathBuf::from("page.html"));
            assert_eq!(base, "https://www.example.org/");
            assert!(external);
            assert_eq!(reference.as_deref(), Some("https://example.org"));
            assert!(!filter.strict);
        }
        _ => panic!("expected Links"),
    }
}

#[test]
fn cli_links_requires_base() {
    assert!(Cli::try_parse_from(["linkgate", "links", "page.html"]).is_err());
}

#[test]
fn cli_parse_sample() {
    match parse(&[
        "linkgate",
        "sample",
        "-",
        "--size",
        "5",
        "--exclude-min",
        "2",
        "--exclude-max",
        "100",
        "--strict",
    ]) {
        CliCommand::Sample { input, sample } => {
            assert_eq!(input, Some(PathBuf::from("-")));
            assert_eq!(sample.size, Some(5));
            assert_eq!(sample.exclude_min, Some(2));
            assert_eq!(sample.exclude_max, Some(100));
            assert!(sample.strict);
        }
        _ => panic!("expected Sample"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["linkgate", "sample", "--config", "/tmp/linkgate.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/linkgate.toml")));
    assert!(matches!(cli.command, CliCommand::Sample { .. }));
}
