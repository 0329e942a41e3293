//! Text rendering for the data table.
//!
//! The view is a pure reader of model state:
//!
//! ```text
//! Name  | Email
//! ------+------------------
//! ada   | ada@example.com
//! grace | grace@example.com
//!
//! Page size: [10] 25 50 100
//! « 1 [2] 3 4 5 … 12 »
//! ```

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

use super::model::Model;
use super::types::Row;

/// Styles for the table body, the page-size menu and status lines.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Column headers.
    pub header: Style,
    /// The header separator line.
    pub separator: Style,
    /// The page size currently in effect.
    pub selected_size: Style,
    /// Other entries of the page-size menu.
    pub size: Style,
    /// Placeholder shown when there are no rows.
    pub empty: Style,
    /// Load failure line.
    pub error: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subtle = Style::new().foreground(lipgloss::AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        Self {
            header: Style::new().bold(true),
            separator: subtle.clone(),
            selected_size: Style::new().bold(true),
            size: subtle.clone(),
            empty: subtle,
            error: Style::new().foreground(lipgloss::Color::from("#FF5F87")),
        }
    }
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(fill))
}

impl<R> Model<R>
where
    R: Row + Clone + Send + 'static,
{
    /// Renders the header, the current rows, the page-size menu and the pager.
    ///
    /// The pager line is omitted while there is at most one page.
    pub fn view(&self) -> String {
        let mut lines = self.table_lines();

        if self.items().is_empty() {
            let placeholder = if self.is_loading() {
                "Loading…"
            } else {
                "No rows"
            };
            lines.push(self.styles.empty.clone().inline(true).render(placeholder));
        }

        if let Some(err) = self.error() {
            lines.push(self.styles.error.clone().inline(true).render(&err.to_string()));
        }

        lines.push(String::new());
        lines.push(self.page_size_view());

        let pager = self.pager().view();
        if !pager.is_empty() {
            lines.push(pager);
        }

        lines.join("\n")
    }

    /// Renders the page-size menu with the size in effect bracketed.
    pub fn page_size_view(&self) -> String {
        let current = self.page_size();
        let entries: Vec<String> = self
            .page_sizes()
            .iter()
            .map(|size| {
                if *size == current {
                    self.styles
                        .selected_size
                        .clone()
                        .inline(true)
                        .render(&format!("[{size}]"))
                } else {
                    self.styles.size.clone().inline(true).render(&size.to_string())
                }
            })
            .collect();
        format!("Page size: {}", entries.join(" "))
    }

    fn table_lines(&self) -> Vec<String> {
        let columns = self.columns();
        if columns.is_empty() {
            return Vec::new();
        }

        let cells: Vec<Vec<String>> = self
            .items()
            .iter()
            .map(|row| columns.iter().map(|column| column.cell(row)).collect())
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                column.width.unwrap_or_else(|| {
                    cells
                        .iter()
                        .map(|row| row[i].width())
                        .chain(std::iter::once(column.name.width()))
                        .max()
                        .unwrap_or(0)
                })
            })
            .collect();

        let mut lines = Vec::with_capacity(cells.len() + 2);

        let header: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(column, width)| pad(&column.name, *width))
            .collect();
        lines.push(
            self.styles
                .header
                .clone()
                .inline(true)
                .render(header.join(" | ").trim_end()),
        );

        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        lines.push(self.styles.separator.clone().inline(true).render(&rule.join("-+-")));

        for row in &cells {
            let padded: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| pad(cell, *width))
                .collect();
            lines.push(padded.join(" | ").trim_end().to_string());
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatable::{Column, Config, LoadError, PageResponse};
    use serde_json::{json, Value};

    fn strip(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    fn table(columns: Vec<Column<Value>>) -> Model<Value> {
        let loader = |_page: usize, size: usize| async move {
            Ok::<_, LoadError>(PageResponse {
                content: Vec::<Value>::new(),
                number: 0,
                total_pages: 0,
                size,
            })
        };
        Model::new(Config::default(), columns, loader).expect("valid config")
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("日本", 5), "日本 ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_view_renders_rows() {
        let table = table(vec![
            Column::field("Name", "name"),
            Column::computed("Domain", |row: &Value| {
                row["email"]
                    .as_str()
                    .and_then(|email| email.split('@').nth(1))
                    .unwrap_or_default()
                    .to_string()
            }),
        ])
        .with_items(vec![
            json!({"name": "ada", "email": "ada@example.com"}),
            json!({"name": "grace", "email": "grace@navy.mil"}),
        ]);

        let view = strip(&table.view());
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[0], "Name  | Domain");
        assert_eq!(lines[1], "------+------------");
        assert_eq!(lines[2], "ada   | example.com");
        assert_eq!(lines[3], "grace | navy.mil");
        assert!(view.contains("Page size: [10] 25 50 100"));
    }

    #[test]
    fn test_view_placeholder_without_rows() {
        let mut table = table(vec![Column::field("Name", "name")]);
        assert!(strip(&table.view()).contains("No rows"));

        let _cmd = table.reload();
        assert!(strip(&table.view()).contains("Loading…"));
    }

    #[test]
    fn test_view_hides_pager_before_load() {
        let table = table(vec![Column::field("Name", "name")]);
        let view = strip(&table.view());
        assert!(!view.contains('«'));
    }

    #[test]
    fn test_page_size_menu_marks_custom_size() {
        let mut table = table(vec![Column::field("Name", "name")]);
        let _cmd = table.set_page_size(25);
        assert_eq!(strip(&table.page_size_view()), "Page size: 10 [25] 50 100");

        let _cmd = table.set_page_size(7);
        assert_eq!(strip(&table.page_size_view()), "Page size: 10 25 50 100");
    }

    #[test]
    fn test_fixed_column_width() {
        let table = table(vec![Column::field("Id", "id").with_width(4)])
            .with_items(vec![json!({"id": 7})]);
        let view = strip(&table.view());
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[0], "Id");
        assert_eq!(lines[1], "----");
        assert_eq!(lines[2], "7");
    }
}
