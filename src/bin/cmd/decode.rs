// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decode command - hex in, JSON out.

use clap::{Args, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use crate::common::{parse_hex, Result};
use uacodec::{BinaryEncodable, DataValue, DataValueArray, DecodingOptions, Variant, WriteRequest};

/// Decode hex input.
#[derive(Subcommand, Clone, Debug)]
pub enum DecodeCmd {
    /// Decode a single DataValue
    DataValue(DecodeArgs),

    /// Decode an i32-counted DataValue array
    DataValueArray(DecodeArgs),

    /// Decode a Variant
    Variant(DecodeArgs),

    /// Decode a WriteRequest including its type id
    WriteRequest(DecodeArgs),
}

/// Arguments shared by every decode target.
#[derive(Args, Clone, Debug)]
pub struct DecodeArgs {
    /// Encoded bytes as hex
    #[arg(value_name = "HEX", num_args = 1.., required = true)]
    hex: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl DecodeCmd {
    pub fn run(self, options: &DecodingOptions) -> Result<()> {
        match self {
            DecodeCmd::DataValue(args) => decode::<DataValue>(args, options),
            DecodeCmd::DataValueArray(args) => decode::<DataValueArray>(args, options),
            DecodeCmd::Variant(args) => decode::<Variant>(args, options),
            DecodeCmd::WriteRequest(args) => decode::<WriteRequest>(args, options),
        }
    }
}

fn decode<T>(args: DecodeArgs, options: &DecodingOptions) -> Result<()>
where
    T: BinaryEncodable + Serialize,
{
    let bytes = parse_hex(&args.hex.join(""))?;
    let value = T::decode_with_options(&bytes, options)?;

    let consumed = value.encoded_len();
    info!(consumed, total = bytes.len(), "decoded");
    if consumed < bytes.len() {
        warn!(trailing = bytes.len() - consumed, "trailing bytes ignored");
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{json}");
    Ok(())
}
