use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const OP_WIDTH_MAX: usize = 60;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern is valid")
});

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Colore per tipo di operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "subject_add" => Colour::Green,
        "del" | "subject_del" => Colour::Red,
        "edit" => Colour::Yellow,
        "done" => Colour::Cyan,
        "settings" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Truncate the visible text to the column limit, keeping only the operation word colored.
fn format_op_target(operation: &str, target: &str) -> String {
    let visible = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };

    let truncated = if visible.chars().count() > OP_WIDTH_MAX {
        let mut s: String = visible.chars().take(OP_WIDTH_MAX - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    let color = color_for_operation(operation);
    match truncated.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String)> = entries
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);
                (id, date, format_op_target(&operation, &target), message)
            })
            .collect();

        let id_w = rows
            .iter()
            .map(|(id, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows.iter().map(|(_, d, _, _)| d.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|(_, _, op, _)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);

        println!("📜 Internal log:\n");

        for (id, date, op_target, message) in rows {
            // pad on visible width, escape codes excluded
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
