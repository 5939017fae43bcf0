//
//  alfresco-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table building and cell formatting helpers on top of `comfy-table`.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::alfresco::ProbeOutcome;

/// A table with the CLI's standard preset.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Fluent wrapper over [`Table`] with optional header coloring.
///
/// # Example
///
/// ```rust
/// use alfresco_client::output::TableBuilder;
///
/// let table = TableBuilder::new()
///     .color(false)
///     .headers(["Name", "Type"])
///     .row(["Sites", "cm:folder"])
///     .build();
/// assert!(table.to_string().contains("cm:folder"));
/// ```
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            self.table
                .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect::<Vec<_>>());
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table.add_row(cells.into_iter().map(Into::into).collect::<Vec<String>>());
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self = self.row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    let text = if value { "Yes" } else { "No" };
    if !color {
        return text.to_string();
    }
    use console::style;
    if value {
        style(text).green().to_string()
    } else {
        style(text).dim().to_string()
    }
}

/// Colors a probe outcome: green when reachable, yellow when rejected, red on failure.
pub fn format_outcome(outcome: &ProbeOutcome, color: bool) -> String {
    let text = outcome.to_string();
    if !color {
        return text;
    }
    use console::style;
    match outcome {
        ProbeOutcome::Reachable(_) => style(text).green().to_string(),
        ProbeOutcome::Rejected(_) => style(text).yellow().to_string(),
        ProbeOutcome::Failed(_) => style(text).red().to_string(),
    }
}

/// Shortens `s` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Renders an optional cell, using `-` for missing values.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("budget.xlsx", 20), "budget.xlsx");
        assert_eq!(truncate("quarterly-report-final.docx", 10), "quarter...");
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("résumé-très-long", 8), "résum...");
    }

    #[test]
    fn test_format_without_color() {
        assert_eq!(format_bool(true, false), "Yes");
        assert_eq!(format_outcome(&ProbeOutcome::Rejected(401), false), "rejected (401)");
        assert_eq!(or_dash(None), "-");
    }

    #[test]
    fn test_table_rows() {
        let table = TableBuilder::new()
            .color(false)
            .headers(["Id", "Title"])
            .rows([["swsdp", "Sample"], ["hr", "Human Resources"]])
            .build();
        let rendered = table.to_string();
        assert!(rendered.contains("swsdp"));
        assert!(rendered.contains("Human Resources"));
    }
}
