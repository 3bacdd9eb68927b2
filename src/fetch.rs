//! Page-by-page retrieval of detailed reports.

use std::panic;
use std::thread;

use tracing::info;

use crate::client::XReportsApi;
use crate::error::Result;
use crate::model::{XReport, XReportSummary};

/// Fetch the details of one page, one request per summary, all at once.
/// The result keeps the listing order.
fn fetch_details<A: XReportsApi + ?Sized>(
    api: &A,
    summaries: &[XReportSummary],
) -> Result<Vec<XReport>> {
    thread::scope(|s| {
        let handles: Vec<_> = summaries
            .iter()
            .map(|summary| s.spawn(move || api.report(summary.document_id)))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    })
}

/// Walk every page in offset order and hand each page's detailed reports to
/// `on_page` before the next page is requested. Returns the number of
/// reports fetched.
pub fn fetch_all<A, F>(api: &A, mut on_page: F) -> Result<usize>
where
    A: XReportsApi + ?Sized,
    F: FnMut(Vec<XReport>) -> Result<()>,
{
    let mut page = api.page(0)?;
    let total = page.total;
    info!(total, "reports in DB");

    let mut offset = 0;
    let mut fetched = 0;

    while !page.documents.is_empty() {
        let count = page.documents.len() as u64;
        info!(
            "Fetching reports {}-{}/{}",
            offset + 1,
            (offset + count).min(total),
            total
        );

        let reports = fetch_details(api, &page.documents)?;
        fetched += reports.len();
        on_page(reports)?;

        offset += count;
        if offset >= total {
            break;
        }
        page = api.page(offset)?;
    }

    Ok(fetched)
}
