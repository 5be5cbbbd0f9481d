use capbudg_core::query::{RowSum, TableDetails, TableList};

pub fn format_tables(list: &TableList) -> String {
    let mut out = format!("{} table(s):\n", list.tables.len());
    for name in &list.tables {
        out.push_str(&format!("  {name}\n"));
    }
    out
}

pub fn format_details(details: &TableDetails) -> String {
    let mut out = format!("=== {} ===\n\n", details.table_name);
    for (i, row) in details.row_names.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {}\n", i + 1, row));
    }
    out
}

pub fn format_sum(row_sum: &RowSum) -> String {
    let width = row_sum.table_name.len().max(row_sum.row_name.len());
    format!(
        "  {:<8} {:<width$}\n  {:<8} {:<width$}\n  {:<8} {:.2}",
        "Table",
        row_sum.table_name,
        "Row",
        row_sum.row_name,
        "Sum",
        row_sum.sum,
        width = width
    )
}
