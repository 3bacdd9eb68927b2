use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum XReportError {
    #[error("Invalid username or password, cannot authenticate")]
    Authentication,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("camptocamp API error: {status} on {endpoint}")]
    Api { status: u16, endpoint: String },

    #[error("Malformed geometry in report {document_id}: {reason}")]
    MalformedGeometry { document_id: u64, reason: String },

    #[error("No locale available for report {document_id}")]
    NoLocaleAvailable { document_id: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, XReportError>;

impl XReportError {
    pub fn api(status: u16, endpoint: impl fmt::Display) -> Self {
        XReportError::Api {
            status,
            endpoint: endpoint.to_string(),
        }
    }

    pub fn malformed_geometry(document_id: u64, reason: impl fmt::Display) -> Self {
        XReportError::MalformedGeometry {
            document_id,
            reason: reason.to_string(),
        }
    }
}
