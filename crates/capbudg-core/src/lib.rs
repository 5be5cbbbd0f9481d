pub mod error;
pub mod extraction;
pub mod model;
pub mod query;
pub mod values;

use std::sync::Arc;

use error::CapBudgError;
use extraction::{ExtractOptions, SheetSource};
use model::TableCollection;
use query::QueryEngine;
use tracing::{info, warn};

/// Main API entry point: read the template worksheet and build every table.
pub fn load_collection(
    source: &dyn SheetSource,
    options: &ExtractOptions,
) -> Result<TableCollection, CapBudgError> {
    info!(
        source = %source.describe(),
        sheet = %options.sheet_name,
        "extracting workbook"
    );

    let sheet = source.read_sheet(&options.sheet_name)?;
    let collection = extraction::extract_tables(&sheet)?;

    info!(tables = collection.len(), "workbook extracted");
    Ok(collection)
}

/// Like [`load_collection`], but a failed extraction yields an empty
/// collection so queries report it instead of the process exiting.
///
/// The error is returned alongside so the caller can surface it.
pub fn load_or_empty(
    source: &dyn SheetSource,
    options: &ExtractOptions,
) -> (TableCollection, Option<CapBudgError>) {
    match load_collection(source, options) {
        Ok(collection) => (collection, None),
        Err(e) => {
            warn!(source = %source.describe(), error = %e, "failed to load data");
            (TableCollection::empty(), Some(e))
        }
    }
}

/// Load once and wrap the result in a shareable [`QueryEngine`].
pub fn open_engine(
    source: &dyn SheetSource,
    options: &ExtractOptions,
) -> (QueryEngine, Option<CapBudgError>) {
    let (collection, error) = load_or_empty(source, options);
    (QueryEngine::new(Arc::new(collection)), error)
}
