// src/remap/mod.rs

pub mod types;
pub mod utils;

pub use types::{ColumnIndex, ConversionSummary, RawTable, RemappedTable, OUTPUT_HEADER};

use tracing::{debug, info, warn};
use utils::{clean_cell, header_contains};

/// Header substring that marks the email column.
pub const EMAIL_NEEDLE: &str = "email";
/// Header substring that marks the phone column. Gym exports label it
/// "Cell Phone" / "Cell Number"; a bare "Phone" column is not picked up.
pub const PHONE_NEEDLE: &str = "cell";

/// Split export text into rows and trimmed cells.
///
/// Splitting is naive: every `,` separates cells and every `\n` separates
/// rows, quoted or not. Never fails; empty text gives one row with one empty
/// cell.
pub fn parse(text: &str) -> RawTable {
    text.trim()
        .split('\n')
        .map(|line| line.split(',').map(clean_cell).collect())
        .collect()
}

/// Locate the email and phone columns in `header`. First match wins.
pub fn resolve_columns<S: AsRef<str>>(header: &[S]) -> ColumnIndex {
    let find = |needle: &str| {
        header
            .iter()
            .position(|h| header_contains(h.as_ref(), needle))
    };
    ColumnIndex {
        email: find(EMAIL_NEEDLE),
        phone: find(PHONE_NEEDLE),
    }
}

/// Project every data row of `rows` onto `[email, phone]`, dropping rows
/// where both values come out empty.
pub fn remap(rows: &[Vec<String>], columns: ColumnIndex) -> RemappedTable {
    let lookup = |row: &[String], idx: Option<usize>| -> String {
        idx.and_then(|i| row.get(i)).cloned().unwrap_or_default()
    };

    let mut out = RemappedTable::with_header();
    for row in rows.iter().skip(1) {
        let email = lookup(row, columns.email);
        let phone = lookup(row, columns.phone);
        if email.is_empty() && phone.is_empty() {
            continue;
        }
        out.rows.push([email, phone]);
    }
    out
}

/// Comma-join cells, newline-join rows. No quoting, no trailing newline.
pub fn serialize(table: &RemappedTable) -> String {
    table
        .rows
        .iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full transform: parse → resolve → remap → serialize.
pub fn convert(text: &str) -> (RemappedTable, String, ConversionSummary) {
    let rows = parse(text);
    let header: &[String] = rows.first().map(Vec::as_slice).unwrap_or(&[]);
    let columns = resolve_columns(header);
    let (email_idx, phone_idx) = columns.as_signed();
    debug!(email_idx, phone_idx, "resolved columns");

    let name_of = |idx: Option<usize>| idx.and_then(|i| header.get(i)).cloned();
    if columns.is_empty() {
        warn!(header = ?header, "no email or cell column in header");
    }

    let table = remap(&rows, columns);
    let csv = serialize(&table);

    let rows_read = rows.len().saturating_sub(1);
    let rows_kept = table.data().len();
    let summary = ConversionSummary {
        rows_read,
        rows_kept,
        rows_dropped: rows_read - rows_kept,
        email_column: name_of(columns.email),
        phone_column: name_of(columns.phone),
    };
    info!(
        rows_read = summary.rows_read,
        rows_kept = summary.rows_kept,
        rows_dropped = summary.rows_dropped,
        "converted export"
    );

    (table, csv, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,gym_audience::remap=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn rows(table: &RemappedTable) -> Vec<Vec<&str>> {
        table
            .rows
            .iter()
            .map(|r| r.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn parse_single_line() {
        assert_eq!(parse("a,b"), vec![vec!["a", "b"]]);
    }

    #[test]
    fn parse_trims_text_and_cells() {
        let parsed = parse("\n  Name , Email \n Jo ,jo@x.com  \n\n");
        assert_eq!(
            parsed,
            vec![vec!["Name", "Email"], vec!["Jo", "jo@x.com"]]
        );
    }

    #[test]
    fn parse_empty_text_is_one_empty_row() {
        assert_eq!(parse("   \n  "), vec![vec![String::new()]]);
    }

    #[test]
    fn parse_does_not_honour_quotes() {
        let parsed = parse(r#"name,note
"Smith, Jo",hi"#);
        assert_eq!(parsed[1], vec![r#""Smith"#, r#"Jo""#, "hi"]);
    }

    #[test]
    fn resolve_columns_is_case_insensitive() {
        let cols = resolve_columns(&["Name", "EMAIL ADDRESS", "Cell Number"]);
        assert_eq!(cols.email, Some(1));
        assert_eq!(cols.phone, Some(2));
    }

    #[test]
    fn resolve_columns_ignores_plain_phone() {
        let cols = resolve_columns(&["Email", "Phone", "Home Phone"]);
        assert_eq!(cols.email, Some(0));
        assert_eq!(cols.phone, None);
        assert_eq!(cols.as_signed(), (0, -1));
    }

    #[test]
    fn resolve_columns_first_match_wins() {
        let cols = resolve_columns(&["Cell", "Work Email", "Email", "Mobile Cell"]);
        assert_eq!(cols.email, Some(1));
        assert_eq!(cols.phone, Some(0));
    }

    #[test]
    fn remap_always_starts_with_header() {
        let out = remap(&[], ColumnIndex::default());
        assert_eq!(rows(&out), vec![vec!["email", "phone"]]);

        let out = remap(&parse("x,y\n1,2"), ColumnIndex::default());
        assert_eq!(rows(&out), vec![vec!["email", "phone"]]);
    }

    #[test]
    fn remap_tolerates_short_rows() {
        let parsed = parse("name,email,cell\nJo\nAnn,ann@x.com");
        let out = remap(&parsed, resolve_columns(parsed[0].as_slice()));
        assert_eq!(
            rows(&out),
            vec![vec!["email", "phone"], vec!["ann@x.com", ""]]
        );
    }

    #[test]
    fn round_trip_drops_empty_rows() {
        init_test_logging();
        let (_, csv, summary) = convert("email,cell\na@x.com,555\n,\nb@y.com,");
        assert_eq!(csv, "email,phone\na@x.com,555\nb@y.com,");
        assert_eq!(summary.rows_read, 3);
        assert_eq!(summary.rows_dropped, 1);
    }

    #[test]
    fn gym_export_scenario() {
        init_test_logging();
        let (table, _, summary) =
            convert("Name,Email Address,Cell Phone\nJo,jo@x.com,123\nAnn,,456\nSam,,");
        assert_eq!(
            rows(&table),
            vec![
                vec!["email", "phone"],
                vec!["jo@x.com", "123"],
                vec!["", "456"]
            ]
        );
        assert_eq!(summary.email_column.as_deref(), Some("Email Address"));
        assert_eq!(summary.phone_column.as_deref(), Some("Cell Phone"));
    }

    #[test]
    fn crlf_matches_lf() {
        let lf = convert("Email,Cell\na@x.com,1\n,\nb@x.com,2").1;
        let crlf = convert("Email,Cell\r\na@x.com,1\r\n,\r\nb@x.com,2\r\n").1;
        assert_eq!(lf, crlf);
        assert!(!crlf.contains('\r'));
    }

    #[test]
    fn empty_input_gives_header_only() {
        let (table, csv, summary) = convert("");
        assert!(table.data().is_empty());
        assert_eq!(csv, "email,phone");
        assert_eq!(summary.rows_read, 0);
        assert_eq!(summary.email_column, None);
    }

    #[test]
    fn summary_types_serialize_to_json() {
        let cols = resolve_columns(&["Email", "Phone"]);
        assert_eq!(
            serde_json::to_value(cols).unwrap(),
            serde_json::json!({ "email": 0, "phone": null })
        );

        let (table, _, summary) = convert("email,cell
a@x.com,1");
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            serde_json::json!({ "rows": [["email", "phone"], ["a@x.com", "1"]] })
        );
        assert_eq!(serde_json::to_value(&summary).unwrap()["rows_kept"], 1);
    }

    #[test]
    fn serialize_does_not_quote() {
        let mut table = RemappedTable::with_header();
        table.rows.push(["a,b@x.com".into(), "1".into()]);
        assert_eq!(serialize(&table), "email,phone\na,b@x.com,1");
    }
}
