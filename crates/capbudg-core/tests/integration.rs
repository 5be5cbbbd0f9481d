//! Integration tests for the load-then-query pipeline.
//!
//! `MockSource` hands back an in-memory calamine range; the xlsx tests
//! write a real workbook with rust_xlsxwriter and read it back from disk.

use std::path::Path;

use calamine::{Data, Range};
use capbudg_core::error::CapBudgError;
use capbudg_core::extraction::{ExtractOptions, SheetSource, WorkbookFile};
use capbudg_core::{load_collection, open_engine};
use rust_xlsxwriter::Workbook;

struct MockSource {
    sheet: Range<Data>,
}

impl SheetSource for MockSource {
    fn read_sheet(&self, sheet: &str) -> Result<Range<Data>, CapBudgError> {
        if sheet != "CapBudgWS" {
            return Err(CapBudgError::Parse(format!("sheet '{sheet}' not found")));
        }
        Ok(self.sheet.clone())
    }

    fn describe(&self) -> String {
        "mock".into()
    }
}

enum Cell {
    Num(f64),
    Text(&'static str),
}

/// Cells of a filled-in template, last used cell at row 60, column 12.
fn template_cells() -> Vec<(u32, u32, Cell)> {
    use Cell::{Num, Text};

    let mut cells = vec![
        // INITIAL INVESTMENT
        (2, 2, Num(50000.0)),
        (3, 2, Num(0.0)),
        (4, 2, Num(10.0)),
        (5, 2, Num(5000.0)),
        (6, 2, Num(1.0)),
        (7, 2, Num(0.1)),
        (8, 2, Num(10000.0)),
        // CASHFLOW DETAILS
        (2, 6, Num(40000.0)),
        (3, 6, Num(0.4)),
        (4, 6, Num(5000.0)),
        (5, 6, Num(0.4)),
        // DISCOUNT RATE
        (2, 10, Text("Direct")),
        (3, 10, Num(0.1)),
        (4, 10, Num(1.2)),
        (5, 10, Num(0.06)),
        (6, 10, Num(0.055)),
        (7, 10, Num(0.3)),
        (8, 10, Text("see notes")),
        (9, 10, Num(0.1)),
        // WORKING CAPITAL
        (11, 2, Num(10000.0)),
        (12, 2, Num(0.25)),
        (13, 2, Num(0.5)),
        // INITIAL INVESTMENT (Lower)
        (23, 1, Num(50000.0)),
        (24, 1, Num(5000.0)),
        (25, 1, Num(45000.0)),
        (26, 1, Num(10000.0)),
        (27, 1, Num(0.0)),
        (28, 1, Num(10000.0)),
        (29, 1, Num(65000.0)),
        // OPERATING CASHFLOWS labels
        (36, 1, Text("Lifetime Index")),
        (47, 1, Text("NATCF")),
        // INVESTMENT MEASURES
        (52, 2, Num(1234.567)),
        (53, 2, Text("14.2%")),
        (54, 2, Num(0.125)),
        // BOOK VALUE AND DEPRECIATION labels
        (58, 1, Text("Book Value (beginning)")),
        (59, 1, Text("Depreciation")),
        (60, 1, Text("Book Value (ending)")),
    ];

    for col in 3..=12 {
        cells.push((17, col, Num(0.02)));
        cells.push((18, col, Text("3%")));
        cells.push((32, col, Num(if col == 12 { 5000.0 } else { 0.0 })));
        cells.push((59, col, Num(4500.0)));
    }
    for (year, col) in (2..=12).enumerate() {
        cells.push((36, col, Num(year as f64)));
        cells.push((47, col, Num(1000.0 * year as f64)));
    }
    cells
}

fn template_range() -> Range<Data> {
    let mut range = Range::new((0, 0), (60, 12));
    for (row, col, cell) in template_cells() {
        let value = match cell {
            Cell::Num(n) => Data::Float(n),
            Cell::Text(s) => Data::String(s.to_string()),
        };
        range.set_value((row, col), value);
    }
    range
}

fn write_template(path: &Path, sheet_name: &str) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).unwrap();
    for (row, col, cell) in template_cells() {
        let col = col as u16;
        match cell {
            Cell::Num(n) => worksheet.write_number(row, col, n).unwrap(),
            Cell::Text(s) => worksheet.write_string(row, col, s).unwrap(),
        };
    }
    workbook.save(path).unwrap();
}

// ---------------------------------------------------------------------------
// In-memory source
// ---------------------------------------------------------------------------
#[test]
fn every_listed_table_describes_and_sums() {
    let source = MockSource {
        sheet: template_range(),
    };
    let (engine, error) = open_engine(&source, &ExtractOptions::default());
    assert!(error.is_none());

    let tables = engine.list_tables().unwrap().tables;
    assert_eq!(tables.len(), 10);

    for table in &tables {
        let details = engine.describe_table(table).unwrap();
        assert!(!details.row_names.is_empty(), "{table} has no rows");
        for row in &details.row_names {
            match engine.sum_row(table, row) {
                Ok(_) | Err(CapBudgError::NoNumericValues { .. }) => {}
                Err(other) => panic!("{table}/{row}: {other}"),
            }
        }
    }
}

#[test]
fn discount_rates_sum_through_percent_strings() {
    let source = MockSource {
        sheet: template_range(),
    };
    let (engine, _) = open_engine(&source, &ExtractOptions::default());

    let collection = engine.collection();
    let json = serde_json::to_value(collection).unwrap();
    assert_eq!(json["DISCOUNT RATE"]["Discount rate"], "10.00%");
    assert_eq!(json["DISCOUNT RATE"]["Market risk premium"], "5.50%");
    assert_eq!(json["DISCOUNT RATE"]["Cost of Borrowing"], "see notes");

    assert_eq!(engine.sum_row("DISCOUNT RATE", "Discount rate").unwrap().sum, 0.1);
    assert_eq!(engine.sum_row("DISCOUNT RATE", "Beta").unwrap().sum, 1.2);
    assert!(matches!(
        engine.sum_row("DISCOUNT RATE", "Approach"),
        Err(CapBudgError::NoNumericValues { .. })
    ));
    assert!(matches!(
        engine.sum_row("DISCOUNT RATE", "Cost of Borrowing"),
        Err(CapBudgError::NoNumericValues { .. })
    ));
}

#[test]
fn series_and_record_lists_sum_across_periods() {
    let source = MockSource {
        sheet: template_range(),
    };
    let (engine, _) = open_engine(&source, &ExtractOptions::default());

    assert_eq!(engine.sum_row("GROWTH RATES", "Revenue Growth").unwrap().sum, 0.2);
    assert_eq!(
        engine.sum_row("GROWTH RATES", "Fixed Expense Growth").unwrap().sum,
        0.3
    );
    assert_eq!(engine.sum_row("SALVAGE VALUE", "Equipment").unwrap().sum, 5000.0);
    // Label column "Lifetime Index" is skipped, years 0..=10 are summed
    assert_eq!(
        engine.sum_row("OPERATING CASHFLOWS", "Lifetime_Index").unwrap().sum,
        55.0
    );
    assert_eq!(engine.sum_row("OPERATING CASHFLOWS", "NATCF").unwrap().sum, 55000.0);
    assert_eq!(
        engine
            .sum_row("BOOK VALUE AND DEPRECIATION", "Depreciation")
            .unwrap()
            .sum,
        45000.0
    );
    assert_eq!(engine.sum_row("INVESTMENT MEASURES", "NPV").unwrap().sum, 1234.57);
    assert_eq!(engine.sum_row("INVESTMENT MEASURES", "IRR").unwrap().sum, 0.14);
}

#[test]
fn wrong_sheet_degrades_to_empty_collection() {
    let source = MockSource {
        sheet: template_range(),
    };
    let options = ExtractOptions {
        sheet_name: "Sheet1".into(),
    };
    assert!(matches!(
        load_collection(&source, &options),
        Err(CapBudgError::Parse(_))
    ));

    let (engine, error) = open_engine(&source, &options);
    assert!(matches!(error, Some(CapBudgError::Parse(_))));
    assert!(matches!(
        engine.list_tables(),
        Err(CapBudgError::CollectionUnavailable)
    ));
    assert!(matches!(
        engine.describe_table("GROWTH RATES"),
        Err(CapBudgError::CollectionUnavailable)
    ));
    assert!(matches!(
        engine.sum_row("GROWTH RATES", "Revenue Growth"),
        Err(CapBudgError::CollectionUnavailable)
    ));
}

// ---------------------------------------------------------------------------
// Workbook on disk
// ---------------------------------------------------------------------------
#[test]
fn xlsx_file_round_trips_through_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capbudg.xlsx");
    write_template(&path, "CapBudgWS");

    let source = WorkbookFile::new(&path);
    let collection = load_collection(&source, &ExtractOptions::default()).unwrap();
    assert_eq!(collection.len(), 10);

    let (engine, error) = open_engine(&source, &ExtractOptions::default());
    assert!(error.is_none());
    assert_eq!(
        engine.describe_table("WORKING CAPITAL").unwrap().row_names,
        vec!["Initial WC", "WC as % of Revenue", "Salvageable Fraction"]
    );
    assert_eq!(
        engine
            .sum_row("INITIAL INVESTMENT (Lower)", "Initial Investment")
            .unwrap()
            .sum,
        65000.0
    );
    assert_eq!(engine.sum_row("DISCOUNT RATE", "Debt Ratio").unwrap().sum, 0.3);
}

#[test]
fn xlsx_without_template_sheet_is_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("other.xlsx");
    write_template(&path, "Sheet1");

    let err = load_collection(&WorkbookFile::new(&path), &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, CapBudgError::Parse(ref m) if m.contains("CapBudgWS")));
}

#[test]
fn missing_workbook_is_source_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let source = WorkbookFile::new(dir.path().join("Data").join("capbudg.xls"));

    let (engine, error) = open_engine(&source, &ExtractOptions::default());
    assert!(matches!(error, Some(CapBudgError::SourceNotFound { .. })));
    assert!(matches!(
        engine.list_tables(),
        Err(CapBudgError::CollectionUnavailable)
    ));
}
