use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CapBudgError {
    #[error("file not found at '{}'", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to parse workbook: {0}")]
    Parse(String),

    #[error("no data available. Verify the workbook was loaded at startup")]
    CollectionUnavailable,

    #[error("table '{table}' not found. Available tables: {available:?}")]
    TableNotFound {
        table: String,
        available: Vec<String>,
    },

    #[error("row '{row}' not found in table '{table}'. Use describe to view available rows.")]
    RowNotFound { table: String, row: String },

    #[error("no numeric values found in row '{row}' of table '{table}'. Verify the row contains numerical data.")]
    NoNumericValues { table: String, row: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CapBudgError {
    /// Stable machine-readable tag for this failure.
    pub fn kind(&self) -> &'static str {
        match self {
            CapBudgError::SourceNotFound { .. } => "source_not_found",
            CapBudgError::Parse(_) => "parse_failure",
            CapBudgError::CollectionUnavailable => "collection_unavailable",
            CapBudgError::TableNotFound { .. } => "table_not_found",
            CapBudgError::RowNotFound { .. } => "row_not_found",
            CapBudgError::NoNumericValues { .. } => "no_numeric_values",
            CapBudgError::Json(_) => "json",
        }
    }

    /// HTTP-style status a transport layer should report for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            CapBudgError::SourceNotFound { .. }
            | CapBudgError::CollectionUnavailable
            | CapBudgError::TableNotFound { .. }
            | CapBudgError::RowNotFound { .. } => 404,
            CapBudgError::NoNumericValues { .. } => 400,
            CapBudgError::Parse(_) | CapBudgError::Json(_) => 500,
        }
    }
}
