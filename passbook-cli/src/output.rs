use anyhow::{Context, Result};
use clap::ValueEnum;
use passbook_core::{FinalRecord, OutputSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

pub fn write_records<W: Write>(
    out: W,
    records: &[FinalRecord],
    schema: &OutputSchema,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(out, records, schema),
        OutputFormat::Json => write_json(out, records, schema),
    }
}

fn write_csv<W: Write>(out: W, records: &[FinalRecord], schema: &OutputSchema) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(schema.fields()).context("write CSV header")?;
    for rec in records {
        wtr.write_record(rec.values()).context("write CSV row")?;
    }
    wtr.flush().context("flush CSV")?;
    Ok(())
}

/// One JSON object per record, keys in schema order.
pub fn to_json_rows(records: &[FinalRecord], schema: &OutputSchema) -> Vec<Map<String, Value>> {
    records
        .iter()
        .map(|rec| {
            schema
                .entries(rec)
                .into_iter()
                .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                .collect()
        })
        .collect()
}

fn write_json<W: Write>(mut out: W, records: &[FinalRecord], schema: &OutputSchema) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, &to_json_rows(records, schema))
        .context("write JSON")?;
    writeln!(out)?;
    Ok(())
}
