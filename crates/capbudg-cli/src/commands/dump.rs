use capbudg_core::error::CapBudgError;
use capbudg_core::query::QueryEngine;

use crate::output;

/// Dump is always JSON: the nested tables have no flat rendering.
pub fn run(engine: &QueryEngine) -> Result<(), CapBudgError> {
    let collection = engine.collection();
    if collection.is_empty() {
        return Err(CapBudgError::CollectionUnavailable);
    }
    output::json::print(collection)
}
