use crate::domain::Suggestion;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: &'static str,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    fn left(header: &'static str, max_width: Option<usize>) -> Self {
        Self {
            header,
            max_width,
            alignment: Alignment::Left,
        }
    }
}

/// Plain-text table with per-column width limits.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = column.header.chars().count();
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                column.max_width.map_or(width, |max| width.min(max))
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, widths[idx], column.alignment)
            })
            .collect();
        cells.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.to_string()).collect();
        let mut lines = vec![self.render_row(&header, &widths)];
        lines.push(
            widths
                .iter()
                .map(|width| "-".repeat(width + 2))
                .collect::<Vec<_>>()
                .join(" "),
        );
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut result: String = text.chars().take(width - 1).collect();
    result.push('…');
    result
}

/// Renders a single cell with one space of padding on each side.
pub fn render_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(fitted.chars().count());
    match alignment {
        Alignment::Left => format!(" {}{} ", fitted, " ".repeat(remaining)),
        Alignment::Right => format!(" {}{} ", " ".repeat(remaining), fitted),
    }
}

/// Lays out suggestions the way the review list shows them.
pub fn suggestion_table<'a, I>(suggestions: I) -> Table
where
    I: IntoIterator<Item = &'a Suggestion>,
{
    let columns = vec![
        TableColumn::left("Imported", Some(32)),
        TableColumn::left("Suggested", Some(32)),
        TableColumn {
            header: "Conf.",
            max_width: None,
            alignment: Alignment::Right,
        },
        TableColumn::left("Type", None),
        TableColumn::left("Reason", Some(60)),
    ];
    let rows = suggestions
        .into_iter()
        .map(|s| {
            vec![
                s.imported_account.name.clone(),
                format!("{} {}", s.suggested_account.code, s.suggested_account.name),
                format!("{}%", s.confidence),
                s.suggestion_type.to_string(),
                s.reason.clone(),
            ]
        })
        .collect();
    Table { columns, rows }
}
