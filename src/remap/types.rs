// src/remap/types.rs

use serde::Serialize;

/// Header of every converted table.
pub const OUTPUT_HEADER: [&str; 2] = ["email", "phone"];

/// Rows × cells exactly as split from the export. Row 0 is the header.
pub type RawTable = Vec<Vec<String>>;

/// Where the email and phone values live in a given export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ColumnIndex {
    pub email: Option<usize>,
    pub phone: Option<usize>,
}

impl ColumnIndex {
    /// Signed form, `-1` for an unresolved column.
    pub fn as_signed(&self) -> (i64, i64) {
        let signed = |i: Option<usize>| i.map(|i| i as i64).unwrap_or(-1);
        (signed(self.email), signed(self.phone))
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }
}

/// Two-column `[email, phone]` output, header first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RemappedTable {
    pub rows: Vec<[String; 2]>,
}

impl RemappedTable {
    /// A table holding only the output header.
    pub fn with_header() -> Self {
        Self {
            rows: vec![OUTPUT_HEADER.map(String::from)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&[String; 2]> {
        self.rows.first()
    }

    /// Everything after the header.
    pub fn data(&self) -> &[[String; 2]] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// Outcome of a single conversion, logged and handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub rows_dropped: usize,
    pub email_column: Option<String>,
    pub phone_column: Option<String>,
}
