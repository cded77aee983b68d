// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # uacodec CLI
//!
//! Decode and encode OPC UA DataValue payloads from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Decode a DataValue given as hex
//! uacodec decode data-value 0d0ac9022040803be8b3924ed401803be8b3924ed401
//!
//! # Decode with limits from a config file
//! uacodec --config limits.toml decode data-value-array 0200000000 00
//!
//! # Encode a DataValue
//! uacodec encode data-value --float 2.5 --source-timestamp 2018-09-17T14:28:29.112Z
//! ```

mod cmd;
mod common;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use cmd::{DecodeCmd, EncodeCmd};
use common::{init_logging, load_options, Result};

/// uacodec - OPC UA DataValue codec
///
/// Hex input may contain whitespace and a leading `0x`.
#[derive(Parser, Clone)]
#[command(name = "uacodec")]
#[command(about = "OPC UA binary codec for DataValue records", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Decoding limits (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Decode hex input and print it as JSON
    #[command(subcommand)]
    Decode(DecodeCmd),

    /// Build a value from flags and print its hex encoding
    #[command(subcommand)]
    Encode(EncodeCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Decode(cmd) => {
            let options = load_options(cli.config.as_deref())?;
            cmd.run(&options)
        }
        Commands::Encode(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
