use serde::{Deserialize, Serialize};

/// Names of every table in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableList {
    pub tables: Vec<String>,
}

/// Row names available in one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDetails {
    /// Example: "INITIAL INVESTMENT"
    pub table_name: String,
    /// Example: ["Initial Investment", "Opportunity Cost (if any)", ...]
    pub row_names: Vec<String>,
}

/// Numeric total of one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSum {
    pub table_name: String,
    pub row_name: String,
    /// Sum of every numeric value in the row, rounded to 2 decimals.
    pub sum: f64,
}
