use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use tracing::info;

use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Flat, localized rows with a French header
    #[default]
    Csv,
    /// One redacted report document per line (document-store import)
    Jsonl,
}

/// Write the header then every row, all fields quoted.
pub fn write_csv<W: Write>(writer: W, header: &[&str], rows: &[Vec<String>]) -> Result<usize> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(rows.len())
}

pub fn write_csv_file(path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<usize> {
    info!(path = %path.display(), rows = rows.len(), "Writing CSV");
    let file = File::create(path)?;
    write_csv(file, header, rows)
}

/// One compact JSON document per line.
pub fn write_jsonl<W: Write, T: Serialize>(mut writer: W, documents: &[T]) -> Result<usize> {
    for doc in documents {
        serde_json::to_writer(&mut writer, doc)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(documents.len())
}

pub fn write_jsonl_file<T: Serialize>(path: &Path, documents: &[T]) -> Result<usize> {
    info!(path = %path.display(), documents = documents.len(), "Writing JSON lines");
    let file = BufWriter::new(File::create(path)?);
    write_jsonl(file, documents)
}
