use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::utils::colors::paint;
use ansi_term::Colour;
use rusqlite::Connection;

/// Returns the ANSI colour for an operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "record" => Colour::Green,
        "unforce" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_log(conn)?;

        if entries.is_empty() {
            println!("No log entries.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let labels: Vec<String> = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    truncate(&format!("{} {}", e.operation, e.target), 40)
                }
            })
            .collect();
        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        for (entry, label) in entries.iter().zip(labels) {
            let color = color_for_operation(&entry.operation);

            // only the operation word is colored; padding is measured on plain text
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));
            let colored = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", paint(color, op), rest),
                None => paint(color, &label),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
