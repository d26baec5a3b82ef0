//! Text rendering of month / week grids.

use crate::core::calendar::{Cell, Granularity};
use crate::models::preferences::{CompletedStyle, Theme};
use crate::models::{Assignment, SubjectPalette};
use crate::utils::colors::{self, GREEN, GREY, RESET, STRIKE};
use crate::utils::formatting::{bold, pad_right, truncate};
use chrono::{Datelike, NaiveDate};

const COL_WIDTH: usize = 14;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Presentation knobs taken from the configuration.
#[derive(Debug, Clone, Copy)]
pub struct ViewStyle {
    pub theme: Theme,
    pub completed: CompletedStyle,
    /// Records listed per month cell before "+N more".
    pub month_preview: usize,
}

pub fn grid_title(granularity: Granularity, reference: NaiveDate) -> String {
    match granularity {
        Granularity::Month => reference.format("%B %Y").to_string(),
        Granularity::Week => format!("Week of {}", reference.format("%b %-d, %Y")),
    }
}

/// One visible line for a record: colored subject dot + title.
fn record_line(a: &Assignment, palette: &SubjectPalette, style: &ViewStyle) -> String {
    let dot_color = palette
        .color_of(&a.subject)
        .map(|c| c.ansi())
        .unwrap_or(RESET);

    let title = pad_right(&truncate(&a.name, COL_WIDTH - 3), COL_WIDTH - 2);

    let title = if a.completed {
        let strike = if style.completed.show_as_strikethrough {
            STRIKE
        } else {
            ""
        };
        format!("{GREEN}{strike}{title}{RESET}")
    } else {
        title
    };

    format!("{dot_color}●{RESET} {title}")
}

fn cell_lines(
    cell: &Cell<'_>,
    palette: &SubjectPalette,
    style: &ViewStyle,
    limit: Option<usize>,
) -> Vec<String> {
    let mut lines = Vec::new();

    let Some(day) = cell.day else {
        return lines;
    };

    let label = pad_right(&day.day().to_string(), COL_WIDTH);
    lines.push(if cell.records.is_empty() {
        label
    } else {
        bold(&label)
    });

    let shown = limit.unwrap_or(cell.records.len()).min(cell.records.len());
    for a in cell.records.iter().take(shown) {
        lines.push(record_line(a, palette, style));
    }

    let hidden = cell.records.len() - shown;
    if hidden > 0 {
        let more = pad_right(&format!("+{} more", hidden), COL_WIDTH);
        lines.push(format!("{GREY}{more}{RESET}"));
    }

    lines
}

/// Render a grid produced by the calendar builder as rows of seven columns.
pub fn render_grid(
    granularity: Granularity,
    reference: NaiveDate,
    cells: &[Cell<'_>],
    palette: &SubjectPalette,
    style: &ViewStyle,
) -> String {
    let header_color = colors::header_color(style.theme);
    let mut out = String::new();

    out.push_str(&bold(&grid_title(granularity, reference)));
    out.push_str("\n\n");

    for wd in WEEKDAYS {
        out.push_str(&format!("{header_color}{}{RESET}", pad_right(wd, COL_WIDTH)));
    }
    out.push('\n');

    let limit = match granularity {
        Granularity::Month => Some(style.month_preview),
        Granularity::Week => None,
    };

    let blank = " ".repeat(COL_WIDTH);

    for row in cells.chunks(7) {
        let columns: Vec<Vec<String>> = row
            .iter()
            .map(|c| cell_lines(c, palette, style, limit))
            .collect();

        let height = columns.iter().map(Vec::len).max().unwrap_or(0);

        for i in 0..height {
            let line: String = columns
                .iter()
                .map(|col| col.get(i).cloned().unwrap_or_else(|| blank.clone()))
                .collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push('\n');
    }

    out
}
