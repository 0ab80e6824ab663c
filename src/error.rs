use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("workbook write error: {0}")]
    Xlsx(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed row in '{section}' section: {line}")]
    MalformedRow { section: String, line: String },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("unknown session id: {0}")]
    UnknownSession(u64),
}

impl From<rust_xlsxwriter::XlsxError> for PlanError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::Xlsx(error.to_string())
    }
}
