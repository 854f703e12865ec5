// src/preview.rs

use crate::remap::RemappedTable;

/// Data rows shown when no other limit is configured.
pub const DEFAULT_PREVIEW_ROWS: usize = 4;

/// Shown in place of the table before anything is converted.
pub const EMPTY_PREVIEW: &str = "No data yet";

/// Render the header and the first `limit` data rows as a left-aligned text
/// table.
pub fn render(table: &RemappedTable, limit: usize) -> String {
    let Some(header) = table.header() else {
        return EMPTY_PREVIEW.to_string();
    };
    let shown: Vec<&[String; 2]> = std::iter::once(header)
        .chain(table.data().iter().take(limit))
        .collect();

    let mut widths = [0usize; 2];
    for row in &shown {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(shown.len() + 1);
    for (i, row) in shown.iter().enumerate() {
        let cells = if i == 0 {
            [row[0].to_uppercase(), row[1].to_uppercase()]
        } else {
            [row[0].clone(), row[1].clone()]
        };
        lines.push(
            format!(
                "{:<w0$}  {:<w1$}",
                cells[0],
                cells[1],
                w0 = widths[0],
                w1 = widths[1]
            )
            .trim_end()
            .to_string(),
        );
        if i == 0 {
            lines.push(format!("{}  {}", "-".repeat(widths[0]), "-".repeat(widths[1])));
        }
    }

    let hidden = table.data().len().saturating_sub(limit);
    if hidden > 0 {
        lines.push(format!("… {} more row(s)", hidden));
    }
    lines.join("\n")
}
