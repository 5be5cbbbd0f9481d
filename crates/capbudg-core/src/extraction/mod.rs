pub mod layout;
pub mod worksheet;

use std::io;
use std::path::PathBuf;

use calamine::{Data, Range, Reader};

use crate::error::CapBudgError;

pub use worksheet::extract_tables;

/// Options for reading the template worksheet.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub sheet_name: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            sheet_name: layout::SHEET_NAME.to_string(),
        }
    }
}

/// Trait for worksheet backends.
pub trait SheetSource: Send + Sync {
    /// Read one worksheet as a cell range addressed by absolute position.
    fn read_sheet(&self, sheet: &str) -> Result<Range<Data>, CapBudgError>;

    /// Where the sheet comes from (for diagnostics).
    fn describe(&self) -> String;
}

/// A `.xls`/`.xlsx`/`.ods` workbook on disk, opened by file extension.
#[derive(Debug, Clone)]
pub struct WorkbookFile {
    path: PathBuf,
}

impl WorkbookFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SheetSource for WorkbookFile {
    fn read_sheet(&self, sheet: &str) -> Result<Range<Data>, CapBudgError> {
        if !self.path.exists() {
            return Err(CapBudgError::SourceNotFound {
                path: self.path.clone(),
            });
        }

        let mut workbook = calamine::open_workbook_auto(&self.path).map_err(|e| match e {
            calamine::Error::Io(ref io) if io.kind() == io::ErrorKind::NotFound => {
                CapBudgError::SourceNotFound {
                    path: self.path.clone(),
                }
            }
            e => CapBudgError::Parse(format!("failed to open workbook: {e}")),
        })?;

        workbook
            .worksheet_range(sheet)
            .map_err(|e| CapBudgError::Parse(format!("sheet '{sheet}' not found: {e}")))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
