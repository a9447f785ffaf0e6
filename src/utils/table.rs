//! Table rendering utilities for CLI outputs.
//! Widths are measured in terminal columns so that full-width labels line up.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Left-aligns `s` within `width` display columns.
pub fn pad_display(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Renders each line separately so callers can color whole rows.
    pub fn render_lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);

        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_display(&c.header, c.width))
            .collect();
        out.push(header.join(" ").trim_end().to_string());

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    pad_display(row.get(i).map(String::as_str).unwrap_or(""), col.width)
                })
                .collect();
            out.push(cells.join(" ").trim_end().to_string());
        }

        out
    }
}
