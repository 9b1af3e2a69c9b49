//! Build script for pathwise-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release
//! builds.
//!
//! Note: We build a minimal command structure here rather than importing
//! from the main crate, since build scripts cannot depend on the crate
//! being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathwise")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and manipulate paths without touching the filesystem")
        .long_about(
            "Command-line tool for string-only path parsing, joining, relativizing and matching \
             under POSIX or Windows grammar rules",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .help("Path grammar to use (defaults to the host platform)")
                .value_name("PLATFORM")
                .global(true)
                .env("PATHWISE_PLATFORM"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Output format")
                .value_name("FORMAT")
                .global(true)
                .env("PATHWISE_OUTPUT"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a path and show its components")
                .arg(Arg::new("path").required(true)),
        )
        .subcommand(
            Command::new("join")
                .about("Join a base path with fragments")
                .arg(Arg::new("base").required(true))
                .arg(Arg::new("fragments").required(true).num_args(1..)),
        )
        .subcommand(
            Command::new("safe-join")
                .about("Join a relative fragment, refusing traversal out of the base")
                .arg(Arg::new("base").required(true))
                .arg(Arg::new("fragment").required(true)),
        )
        .subcommand(
            Command::new("relative")
                .about("Show a path relative to an ancestor")
                .arg(Arg::new("path").required(true))
                .arg(Arg::new("base").required(true)),
        )
        .subcommand(
            Command::new("matches")
                .about("Test a path against a glob pattern")
                .arg(Arg::new("path").required(true))
                .arg(Arg::new("pattern").required(true)),
        )
        .subcommand(
            Command::new("ancestors")
                .about("List a path's ancestors, most specific first")
                .arg(Arg::new("path").required(true)),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").required(true)),
        )
}

fn main() -> std::io::Result<()> {
    let out_dir =
        PathBuf::from(std::env::var_os("OUT_DIR").expect("OUT_DIR not set by cargo"));

    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;

    fs::write(out_dir.join("pathwise.1"), buffer)?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
