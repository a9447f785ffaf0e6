use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));
    re.replace_all(s, "").into_owned()
}

/// Colour of the operation name in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "submit" => Colour::Green,
        "submit_rejected" => Colour::Red,
        "fill" => Colour::Cyan,
        "clear" => Colour::Yellow,
        "new" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("migrate") => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// One formatted line per entry, operation coloured and padded to a shared width.
    pub fn format_entries(entries: &[LogEntry]) -> Vec<String> {
        let labels: Vec<String> = entries
            .iter()
            .map(|e| {
                let colored = color_for_operation(&e.operation)
                    .paint(e.operation.as_str())
                    .to_string();
                if e.target.is_empty() {
                    colored
                } else {
                    format!("{colored} ({})", e.target)
                }
            })
            .collect();

        let op_w = labels
            .iter()
            .map(|l| strip_ansi(l).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        entries
            .iter()
            .zip(labels)
            .map(|(e, label)| {
                let visible = strip_ansi(&label).chars().count();
                let padding = " ".repeat(op_w.saturating_sub(visible));
                format!(
                    "{:>id_w$}: {} | {}{} => {}",
                    e.id,
                    e.date,
                    label,
                    padding,
                    e.message,
                    id_w = id_w
                )
            })
            .collect()
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;
        println!("📜 Internal log:\n");
        for line in Self::format_entries(&entries) {
            println!("{line}");
        }
        Ok(())
    }
}
