//! The whole run: every page through the flattener (or the redactor) into
//! one output file.

use std::path::Path;

use tracing::debug;

use crate::client::XReportsApi;
use crate::document::redact;
use crate::error::Result;
use crate::fetch::fetch_all;
use crate::flatten::Flattener;
use crate::sink;

/// Rows are only written once every page has been fetched and flattened.
pub fn export_csv<A: XReportsApi + ?Sized>(
    api: &A,
    flattener: &Flattener,
    path: &Path,
) -> Result<usize> {
    let mut rows = Vec::new();
    fetch_all(api, |reports| {
        for report in &reports {
            debug!(document_id = report.document_id, "Flattening report");
            rows.push(flattener.flatten(report)?);
        }
        Ok(())
    })?;

    sink::write_csv_file(path, &flattener.header(), &rows)
}

pub fn export_documents<A: XReportsApi + ?Sized>(
    api: &A,
    preference: &[String],
    path: &Path,
) -> Result<usize> {
    let mut documents = Vec::new();
    fetch_all(api, |reports| {
        for report in &reports {
            documents.push(serde_json::to_value(redact(report, preference)?)?);
        }
        Ok(())
    })?;

    sink::write_jsonl_file(path, &documents)
}
