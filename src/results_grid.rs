use crate::core::db::ResultSet;
use crate::core::{Result, SqlWalkError};

/// Results Grid Module
///
/// Renders a result set for human reading: a width-aligned text table for the
/// terminal, plus CSV, JSON, and Markdown export. NULL cells are kept
/// distinct from the literal string "NULL" all the way to the output.

use std::collections::BTreeMap;

/// How a NULL cell is shown in the text and Markdown renderings.
const NULL_DISPLAY: &str = "NULL";

/// A renderable grid built from one query result.
#[derive(Debug, Clone)]
pub struct ResultsGrid {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    /// Rows shown by `render` before truncation; exports always emit all rows
    max_display_rows: usize,
}

impl ResultsGrid {
    /// Builds a grid from a result set with the default display cap.
    pub fn from_result(result: &ResultSet) -> Self {
        ResultsGrid {
            headers: result.columns.clone(),
            rows: result.rows.clone(),
            max_display_rows: 20,
        }
    }

    /// Caps the number of rows `render` shows. Zero means no cap.
    pub fn with_max_display_rows(mut self, max_rows: usize) -> Self {
        self.max_display_rows = max_rows;
        self
    }

    /// Total rows held by the grid, independent of the display cap.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn displayed_rows(&self) -> &[Vec<Option<String>>] {
        if self.max_display_rows == 0 || self.rows.len() <= self.max_display_rows {
            &self.rows
        } else {
            &self.rows[..self.max_display_rows]
        }
    }

    fn cell_text(cell: &Option<String>) -> &str {
        cell.as_deref().unwrap_or(NULL_DISPLAY)
    }

    /// Column widths sized to the widest of header and displayed cells.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in self.displayed_rows() {
            for (i, cell) in row.iter().enumerate() {
                let len = Self::cell_text(cell).chars().count();
                if i < widths.len() && len > widths[i] {
                    widths[i] = len;
                }
            }
        }
        widths
    }

    /// Renders the grid as an aligned text table. Truncated output ends with
    /// a line saying how many rows were left out.
    pub fn render(&self) -> String {
        if self.headers.is_empty() {
            return String::new();
        }
        let widths = self.column_widths();
        let mut output = String::new();

        let header_line: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:<width$}", h, width = *w))
            .collect();
        output.push_str(header_line.join(" | ").trim_end());
        output.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        output.push_str(&rule.join("-+-"));
        output.push('\n');

        for row in self.displayed_rows() {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<width$}", Self::cell_text(cell), width = *w))
                .collect();
            output.push_str(line.join(" | ").trim_end());
            output.push('\n');
        }

        let hidden = self.rows.len().saturating_sub(self.displayed_rows().len());
        if hidden > 0 {
            output.push_str(&format!("... {} more rows\n", hidden));
        }
        output
    }

    /// Exports the full grid to the named format: csv, json, or markdown.
    pub fn export(&self, format: &str) -> Result<String> {
        match format.to_lowercase().as_str() {
            "csv" => Ok(self.export_to_csv()),
            "json" => self.export_to_json(),
            "markdown" => Ok(self.export_to_markdown()),
            _ => Err(SqlWalkError::Render(format!(
                "unsupported export format: '{}' (supported: csv, json, markdown)",
                format
            ))),
        }
    }

    fn export_to_csv(&self) -> String {
        fn escape(field: &str) -> String {
            if field.contains(',') || field.contains('"') || field.contains('\n') {
                format!("\"{}\"", field.replace('"', "\"\""))
            } else {
                field.to_string()
            }
        }

        let mut output = String::new();
        let header: Vec<String> = self.headers.iter().map(|h| escape(h)).collect();
        output.push_str(&header.join(","));
        output.push('\n');
        for row in &self.rows {
            // NULL becomes an empty field, the usual CSV convention
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.as_deref().map(escape).unwrap_or_default())
                .collect();
            output.push_str(&line.join(","));
            output.push('\n');
        }
        output
    }

    fn export_to_json(&self) -> Result<String> {
        let mut rows = Vec::new();
        for row in &self.rows {
            let mut row_map = BTreeMap::new();
            for (i, cell) in row.iter().enumerate() {
                if let Some(header) = self.headers.get(i) {
                    let value = match cell {
                        Some(text) => serde_json::Value::String(text.clone()),
                        None => serde_json::Value::Null,
                    };
                    row_map.insert(header.clone(), value);
                }
            }
            rows.push(row_map);
        }
        Ok(serde_json::to_string(&rows)?)
    }

    fn export_to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("| {} |\n", self.headers.join(" | ")));
        let rule: Vec<String> = self.headers.iter().map(|_| "---".to_string()).collect();
        output.push_str(&format!("| {} |\n", rule.join(" | ")));
        for row in &self.rows {
            let line: Vec<&str> = row.iter().map(Self::cell_text).collect();
            output.push_str(&format!("| {} |\n", line.join(" | ")));
        }
        output
    }
}
