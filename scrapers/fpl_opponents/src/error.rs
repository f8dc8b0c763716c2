#[derive(Debug, thiserror::Error)]
pub enum FplError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response shape from {endpoint}: {source}")]
    Schema {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("No team with short code '{0}'")]
    TeamCodeNotFound(String),
    #[error("No team with id {0}")]
    TeamIdNotFound(u32),
    #[error("Spreadsheet export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FplError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FplError::TeamCodeNotFound(_) | FplError::TeamIdNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, FplError>;
