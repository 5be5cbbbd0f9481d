//! Fixed cell coordinates of the capital budgeting worksheet template.
//!
//! All positions are 0-based `(row, column)`; row 0 is sheet row 1 and
//! column 0 is column A.

/// Worksheet that holds the template.
pub const SHEET_NAME: &str = "CapBudgWS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    /// Stored as decoded.
    Raw,
    /// Numeric cells are stored as `"12.34%"` display strings.
    Percent,
}

#[derive(Debug, Clone, Copy)]
pub struct ScalarField {
    pub name: &'static str,
    pub row: u32,
    pub col: u32,
    pub format: CellFormat,
}

/// A row read from `first_col` to the last used column of the sheet.
#[derive(Debug, Clone, Copy)]
pub struct SeriesField {
    pub name: &'static str,
    pub row: u32,
    pub first_col: u32,
}

/// A rectangular block read column by column: each source column becomes
/// one record, and source row `first_row + i` becomes field `fields[i]`.
#[derive(Debug, Clone, Copy)]
pub struct RecordBlock {
    pub first_row: u32,
    pub first_col: u32,
    pub fields: &'static [&'static str],
}

impl RecordBlock {
    pub fn last_row(&self) -> u32 {
        self.first_row + self.fields.len() as u32 - 1
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TableLayout {
    Scalar(&'static [ScalarField]),
    Series(&'static [SeriesField]),
    Records(RecordBlock),
}

#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub name: &'static str,
    pub layout: TableLayout,
}

const fn raw(name: &'static str, row: u32, col: u32) -> ScalarField {
    ScalarField {
        name,
        row,
        col,
        format: CellFormat::Raw,
    }
}

const fn pct(name: &'static str, row: u32, col: u32) -> ScalarField {
    ScalarField {
        name,
        row,
        col,
        format: CellFormat::Percent,
    }
}

const fn series(name: &'static str, row: u32) -> SeriesField {
    SeriesField {
        name,
        row,
        first_col: 3,
    }
}

pub const OPERATING_CASHFLOW_FIELDS: &[&str] = &[
    "Lifetime_Index",
    "Revenues",
    "Var_Expenses",
    "Fixed_Expenses",
    "EBITDA",
    "Depreciation",
    "EBIT",
    "Tax",
    "EBIT_after_tax",
    "Add_Depreciation",
    "Delta_Working_Capital",
    "NATCF",
    "Discount_Factor",
    "Discounted_CF",
];

pub const BOOK_VALUE_FIELDS: &[&str] = &["Book_Value_Beginning", "Depreciation", "Book_Value_Ending"];

/// Every table of the template, in the order they appear in the collection.
pub const LAYOUT: &[TableSpec] = &[
    TableSpec {
        name: "INITIAL INVESTMENT",
        layout: TableLayout::Scalar(&[
            raw("Initial Investment", 2, 2),
            raw("Opportunity Cost (if any)", 3, 2),
            raw("Lifetime of the investment", 4, 2),
            raw("Salvage Value at end of project", 5, 2),
            raw("Deprec. method(1.St. line; 2.DDB)", 6, 2),
            raw("Tax Credit (if any)", 7, 2),
            raw("Other Invest.(non-depreciable)", 8, 2),
        ]),
    },
    TableSpec {
        name: "CASHFLOW DETAILS",
        layout: TableLayout::Scalar(&[
            raw("Revenues in year 1", 2, 6),
            raw("Var. Expenses as % of Rev", 3, 6),
            raw("Fixed expenses in year 1", 4, 6),
            raw("Tax rate on net income", 5, 6),
        ]),
    },
    TableSpec {
        name: "DISCOUNT RATE",
        layout: TableLayout::Scalar(&[
            raw("Approach", 2, 10),
            pct("Discount rate", 3, 10),
            raw("Beta", 4, 10),
            pct("Riskless rate", 5, 10),
            pct("Market risk premium", 6, 10),
            pct("Debt Ratio", 7, 10),
            pct("Cost of Borrowing", 8, 10),
            pct("Discount rate used", 9, 10),
        ]),
    },
    TableSpec {
        name: "WORKING CAPITAL",
        layout: TableLayout::Scalar(&[
            raw("Initial WC", 11, 2),
            raw("WC as % of Revenue", 12, 2),
            raw("Salvageable Fraction", 13, 2),
        ]),
    },
    TableSpec {
        name: "GROWTH RATES",
        layout: TableLayout::Series(&[
            series("Revenue Growth", 17),
            series("Fixed Expense Growth", 18),
        ]),
    },
    TableSpec {
        name: "INITIAL INVESTMENT (Lower)",
        layout: TableLayout::Scalar(&[
            raw("Investment", 23, 1),
            raw("Tax Credit", 24, 1),
            raw("Net Investment", 25, 1),
            raw("Working Cap", 26, 1),
            raw("Opp Cost", 27, 1),
            raw("Other Invest", 28, 1),
            raw("Initial Investment", 29, 1),
        ]),
    },
    TableSpec {
        name: "SALVAGE VALUE",
        layout: TableLayout::Series(&[series("Equipment", 32), series("Working Capital", 33)]),
    },
    TableSpec {
        name: "OPERATING CASHFLOWS",
        layout: TableLayout::Records(RecordBlock {
            first_row: 36,
            first_col: 1,
            fields: OPERATING_CASHFLOW_FIELDS,
        }),
    },
    TableSpec {
        name: "INVESTMENT MEASURES",
        layout: TableLayout::Scalar(&[raw("NPV", 52, 2), raw("IRR", 53, 2), raw("ROC", 54, 2)]),
    },
    TableSpec {
        name: "BOOK VALUE AND DEPRECIATION",
        layout: TableLayout::Records(RecordBlock {
            first_row: 58,
            first_col: 1,
            fields: BOOK_VALUE_FIELDS,
        }),
    },
];

/// Smallest `(last_row, last_col)` a worksheet must reach for every
/// coordinate in [`LAYOUT`] to be addressable.
pub fn required_extent() -> (u32, u32) {
    LAYOUT
        .iter()
        .map(|spec| match spec.layout {
            TableLayout::Scalar(fields) => fields
                .iter()
                .map(|f| (f.row, f.col))
                .fold((0, 0), |(r, c), (fr, fc)| (r.max(fr), c.max(fc))),
            TableLayout::Series(fields) => fields
                .iter()
                .map(|f| (f.row, f.first_col))
                .fold((0, 0), |(r, c), (fr, fc)| (r.max(fr), c.max(fc))),
            TableLayout::Records(block) => (block.last_row(), block.first_col),
        })
        .fold((0, 0), |(r, c), (tr, tc)| (r.max(tr), c.max(tc)))
}
