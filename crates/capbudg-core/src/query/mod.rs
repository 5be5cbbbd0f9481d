pub mod outcome;

use std::sync::Arc;

use tracing::debug;

use crate::error::CapBudgError;
use crate::model::{CellValue, Table, TableCollection};
use crate::values::{coerce_to_float, round_cents};

pub use outcome::{RowSum, TableDetails, TableList};

/// Read-only queries over an extracted [`TableCollection`].
///
/// Cloning is cheap; every clone shares the same collection.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    collection: Arc<TableCollection>,
}

impl QueryEngine {
    pub fn new(collection: Arc<TableCollection>) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &TableCollection {
        &self.collection
    }

    /// All table names, in extraction order.
    pub fn list_tables(&self) -> Result<TableList, CapBudgError> {
        let collection = self.available()?;
        Ok(TableList {
            tables: collection.names(),
        })
    }

    /// Row names of one table. For a record list these are the field
    /// names of its first record.
    pub fn describe_table(&self, table_name: &str) -> Result<TableDetails, CapBudgError> {
        let table = self.table(table_name)?;
        Ok(TableDetails {
            table_name: table_name.to_string(),
            row_names: table.row_names(),
        })
    }

    /// Sum every numeric value of a row, rounded to 2 decimals.
    ///
    /// Text that does not parse as a number and empty cells are skipped.
    /// A row where nothing parses is an error, distinct from a row that
    /// sums to zero.
    pub fn sum_row(&self, table_name: &str, row_name: &str) -> Result<RowSum, CapBudgError> {
        let table = self.table(table_name)?;
        let row_not_found = || {
            debug!(table = table_name, row = row_name, "row not found");
            CapBudgError::RowNotFound {
                table: table_name.to_string(),
                row: row_name.to_string(),
            }
        };

        let mut total = RowTotal::default();
        match table {
            Table::Scalar(record) => {
                let value = record.get(row_name).ok_or_else(row_not_found)?;
                total.add(value);
            }
            Table::Series(series) => {
                let values = series.get(row_name).ok_or_else(row_not_found)?;
                values.iter().for_each(|v| total.add(v));
            }
            Table::Records(records) => {
                if !records.iter().any(|r| r.contains(row_name)) {
                    return Err(row_not_found());
                }
                records
                    .iter()
                    .filter_map(|r| r.get(row_name))
                    .for_each(|v| total.add(v));
            }
        }

        let sum = total.finish().ok_or_else(|| CapBudgError::NoNumericValues {
            table: table_name.to_string(),
            row: row_name.to_string(),
        })?;

        debug!(table = table_name, row = row_name, sum, "summed row");
        Ok(RowSum {
            table_name: table_name.to_string(),
            row_name: row_name.to_string(),
            sum,
        })
    }

    fn available(&self) -> Result<&TableCollection, CapBudgError> {
        if self.collection.is_empty() {
            debug!("query against empty collection");
            return Err(CapBudgError::CollectionUnavailable);
        }
        Ok(&self.collection)
    }

    fn table(&self, table_name: &str) -> Result<&Table, CapBudgError> {
        let collection = self.available()?;
        collection.get(table_name).ok_or_else(|| {
            debug!(table = table_name, "table not found");
            CapBudgError::TableNotFound {
                table: table_name.to_string(),
                available: collection.names(),
            }
        })
    }
}

/// Running sum that remembers whether anything numeric was seen.
#[derive(Debug, Default)]
struct RowTotal {
    sum: f64,
    found: bool,
}

impl RowTotal {
    fn add(&mut self, value: &CellValue) {
        if let Some(v) = coerce_to_float(value) {
            self.sum += v;
            self.found = true;
        }
    }

    fn finish(self) -> Option<f64> {
        self.found.then(|| round_cents(self.sum))
    }
}
