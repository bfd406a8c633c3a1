use crate::domain::model::{OutputRow, OUTPUT_HEADERS};

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}

fn format_line(cells: [&str; 6], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Column-aligned preview of the output rows for a terminal.
pub fn render_table(rows: &[OutputRow]) -> String {
    let mut widths: Vec<usize> = OUTPUT_HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![format_line(OUTPUT_HEADERS, &widths)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );

    if rows.is_empty() {
        lines.push("(no rows)".to_string());
    }
    for row in rows {
        lines.push(format_line(row.cells(), &widths));
    }

    lines.join("\n")
}
