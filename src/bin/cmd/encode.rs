// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encode command - flags in, hex out.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use crate::common::{parse_timestamp, Result};
use uacodec::{BinaryEncodable, DataValue, DataValueArray, DataValueField, Variant};

/// Build and encode a value.
#[derive(Subcommand, Clone, Debug)]
pub enum EncodeCmd {
    /// Encode a single DataValue
    DataValue(DataValueArgs),

    /// Encode an array repeating one DataValue
    DataValueArray {
        /// Number of elements
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i32).range(0..))]
        count: i32,

        #[command(flatten)]
        value: DataValueArgs,
    },
}

/// DataValue fields. Only the fields given are marked present.
#[derive(Args, Clone, Debug)]
pub struct DataValueArgs {
    /// Float value
    #[arg(long)]
    float: Option<f32>,

    /// Double value
    #[arg(long)]
    double: Option<f64>,

    /// Int32 value
    #[arg(long)]
    int32: Option<i32>,

    /// Boolean value
    #[arg(long)]
    boolean: Option<bool>,

    /// String value
    #[arg(long)]
    string: Option<String>,

    /// Mark Value present without a payload
    #[arg(long)]
    empty_value: bool,

    /// Status code
    #[arg(long)]
    status: Option<u32>,

    /// Source timestamp (RFC 3339 or unix seconds)
    #[arg(long, value_parser = parse_timestamp)]
    source_timestamp: Option<DateTime<Utc>>,

    /// Source picoseconds
    #[arg(long)]
    source_picoseconds: Option<u16>,

    /// Server timestamp (RFC 3339 or unix seconds)
    #[arg(long, value_parser = parse_timestamp)]
    server_timestamp: Option<DateTime<Utc>>,

    /// Server picoseconds
    #[arg(long)]
    server_picoseconds: Option<u16>,
}

impl DataValueArgs {
    fn variant(&self) -> Result<Option<Variant>> {
        let candidates = [
            self.float.map(Variant::Float),
            self.double.map(Variant::Double),
            self.int32.map(Variant::Int32),
            self.boolean.map(Variant::Boolean),
            self.string.clone().map(Variant::from),
        ];
        let mut given = candidates.into_iter().flatten();
        let first = given.next();
        if given.next().is_some() {
            anyhow::bail!("at most one of --float, --double, --int32, --boolean, --string may be given");
        }
        Ok(first)
    }

    fn build(&self) -> Result<DataValue> {
        let mut builder = DataValue::builder().flag_if(DataValueField::Value, self.empty_value);
        if let Some(value) = self.variant()? {
            builder = builder.value(value);
        }
        if let Some(status) = self.status {
            builder = builder.status(status);
        }
        if let Some(ts) = self.source_timestamp {
            builder = builder.source_timestamp(ts);
        }
        if let Some(ps) = self.source_picoseconds {
            builder = builder.source_picoseconds(ps);
        }
        if let Some(ts) = self.server_timestamp {
            builder = builder.server_timestamp(ts);
        }
        if let Some(ps) = self.server_picoseconds {
            builder = builder.server_picoseconds(ps);
        }
        Ok(builder.build())
    }
}

impl EncodeCmd {
    pub fn run(self) -> Result<()> {
        let bytes = match self {
            EncodeCmd::DataValue(args) => args.build()?.to_bytes()?,
            EncodeCmd::DataValueArray { count, value } => {
                let dv = value.build()?;
                DataValueArray::new(vec![dv; count as usize]).to_bytes()?
            }
        };
        println!("{}", hex::encode(bytes));
        Ok(())
    }
}
