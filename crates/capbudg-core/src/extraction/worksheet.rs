use calamine::{Data, Range};
use tracing::debug;

use crate::error::CapBudgError;
use crate::extraction::layout::{
    required_extent, CellFormat, RecordBlock, ScalarField, SeriesField, TableLayout, LAYOUT,
};
use crate::model::{CellValue, Record, SeriesRecord, Table, TableCollection};
use crate::values::percent_display;

/// Assemble every table of the template from one worksheet.
///
/// The sheet must reach at least the last row and column the layout
/// addresses; blank cells inside that area decode to [`CellValue::Empty`].
pub fn extract_tables(sheet: &Range<Data>) -> Result<TableCollection, CapBudgError> {
    let (last_row, last_col) = sheet
        .end()
        .ok_or_else(|| CapBudgError::Parse("worksheet is empty".into()))?;

    let (need_row, need_col) = required_extent();
    if last_row < need_row || last_col < need_col {
        return Err(CapBudgError::Parse(format!(
            "worksheet ends at row {}, column {} but the template needs row {}, column {}",
            last_row + 1,
            last_col + 1,
            need_row + 1,
            need_col + 1
        )));
    }

    let mut tables = Vec::with_capacity(LAYOUT.len());
    for spec in LAYOUT {
        let table = match spec.layout {
            TableLayout::Scalar(fields) => Table::Scalar(read_scalars(sheet, fields)),
            TableLayout::Series(fields) => Table::Series(read_series(sheet, fields, last_col)),
            TableLayout::Records(block) => Table::Records(read_records(sheet, &block, last_col)),
        };
        debug!(table = spec.name, shape = table.shape(), "extracted table");
        tables.push((spec.name, table));
    }

    Ok(tables.into_iter().collect())
}

fn read_scalars(sheet: &Range<Data>, fields: &[ScalarField]) -> Record {
    fields
        .iter()
        .map(|f| {
            let value = cell_at(sheet, f.row, f.col);
            let value = match f.format {
                CellFormat::Raw => value,
                CellFormat::Percent => percent_display(value),
            };
            (f.name, value)
        })
        .collect()
}

fn read_series(sheet: &Range<Data>, fields: &[SeriesField], last_col: u32) -> SeriesRecord {
    fields
        .iter()
        .map(|f| {
            let values = (f.first_col..=last_col)
                .map(|col| cell_at(sheet, f.row, col))
                .collect::<Vec<_>>();
            (f.name, values)
        })
        .collect()
}

/// Transpose the block: one record per source column.
fn read_records(sheet: &Range<Data>, block: &RecordBlock, last_col: u32) -> Vec<Record> {
    (block.first_col..=last_col)
        .map(|col| {
            block
                .fields
                .iter()
                .enumerate()
                .map(|(i, name)| (*name, cell_at(sheet, block.first_row + i as u32, col)))
                .collect::<Record>()
        })
        .collect()
}

fn cell_at(sheet: &Range<Data>, row: u32, col: u32) -> CellValue {
    sheet
        .get_value((row, col))
        .map(decode_cell)
        .unwrap_or(CellValue::Empty)
}

/// Decode a calamine cell. Errors decode to empty; dates and durations
/// keep their display form.
pub fn decode_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Int(i64::from(*b)),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => CellValue::Text(dt.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}
