use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

use crate::view::{RowView, TableView};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" | "table" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

pub fn render(view: &TableView, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(view),
        OutputFormat::Json => render_json(view),
    }
}

pub fn render_json(view: &TableView) -> String {
    let mut out = serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

const HEADERS: [&str; 4] = ["ID", "Name", "Email", "Role"];

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn column_widths(rows: &[RowView]) -> [usize; 4] {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in rows {
        let cells = [r.id.as_str(), r.name.as_str(), r.email.as_str(), r.role.as_str()];
        for (w, cell) in widths.iter_mut().zip(cells) {
            // editing cells are wrapped in angle brackets
            let len = cell.chars().count() + if r.editing { 2 } else { 0 };
            *w = (*w).max(len);
        }
    }
    widths
}

fn pad(value: &str, width: usize) -> String {
    format!("{:<width$}", value, width = width)
}

fn render_row(r: &RowView, widths: &[usize; 4]) -> String {
    let cells: Vec<String> = [r.id.as_str(), r.name.as_str(), r.email.as_str(), r.role.as_str()]
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            if r.editing && idx > 0 {
                pad(&format!("<{value}>"), widths[idx])
            } else {
                pad(value, widths[idx])
            }
        })
        .collect();
    let actions = if r.editing {
        "save | cancel"
    } else {
        "edit | delete"
    };
    let line = format!("{} {}  {}", checkbox(r.selected), cells.join("  "), actions);
    if r.editing {
        line.yellow().to_string()
    } else if r.selected {
        line.bold().cyan().to_string()
    } else {
        line
    }
}

fn render_pager(view: &TableView) -> String {
    let pager = &view.pager;
    let mut parts: Vec<String> = Vec::new();
    parts.push("<< First".to_string());
    let prev = "< Prev".to_string();
    parts.push(if pager.previous_enabled {
        prev
    } else {
        prev.dimmed().to_string()
    });
    for page in &pager.pages {
        if *page == pager.current {
            parts.push(format!("[{page}]").bold().to_string());
        } else {
            parts.push(page.to_string());
        }
    }
    let next = "Next >".to_string();
    parts.push(if pager.next_enabled {
        next
    } else {
        next.dimmed().to_string()
    });
    parts.push("Last >>".to_string());
    parts.join("  ")
}

pub fn render_text(view: &TableView) -> String {
    let mut out = String::new();
    let widths = column_widths(&view.rows);

    out.push_str(&format!(
        ":: {:<10}: {}\n",
        "Search",
        if view.search_term.is_empty() {
            "-".to_string()
        } else {
            format!("\"{}\"", view.search_term)
        }
    ));
    out.push_str(&format!(
        ":: {:<10}: {} of {} (selected {})\n",
        "Members",
        view.filtered,
        view.total,
        view.selected.len()
    ));
    out.push('\n');

    let header_cells: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w))
        .collect();
    let header = format!(
        "{} {}  Actions",
        checkbox(view.header_checked),
        header_cells.join("  ")
    );
    out.push_str(&header.bold().to_string());
    out.push('\n');

    if view.rows.is_empty() {
        out.push_str(&"    (no members)".dimmed().to_string());
        out.push('\n');
    }
    for row in &view.rows {
        out.push_str(&render_row(row, &widths));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&render_pager(view));
    out.push('\n');
    out
}
