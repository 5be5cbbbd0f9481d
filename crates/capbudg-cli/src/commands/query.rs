use capbudg_core::error::CapBudgError;
use capbudg_core::query::QueryEngine;

use crate::output;

pub fn tables(engine: &QueryEngine, output_format: &str) -> Result<(), CapBudgError> {
    let list = engine.list_tables()?;
    match output_format {
        "json" => output::json::print(&list)?,
        _ => println!("{}", output::table::format_tables(&list)),
    }
    Ok(())
}

pub fn describe(
    engine: &QueryEngine,
    table_name: &str,
    output_format: &str,
) -> Result<(), CapBudgError> {
    let details = engine.describe_table(table_name)?;
    match output_format {
        "json" => output::json::print(&details)?,
        _ => println!("{}", output::table::format_details(&details)),
    }
    Ok(())
}

pub fn sum(
    engine: &QueryEngine,
    table_name: &str,
    row_name: &str,
    output_format: &str,
) -> Result<(), CapBudgError> {
    let row_sum = engine.sum_row(table_name, row_name)?;
    match output_format {
        "json" => output::json::print(&row_sum)?,
        _ => println!("{}", output::table::format_sum(&row_sum)),
    }
    Ok(())
}
