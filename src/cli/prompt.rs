use crate::core::Confirm;
use crate::ui::messages::{prompt, warning};
use std::io;

/// Asks on the terminal; anything but "y"/"yes" declines, as does a closed stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        let mut lines = message.lines();
        let question = lines.next().unwrap_or_default();
        for detail in lines {
            warning(detail);
        }
        prompt(question);

        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(n) if n > 0 => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}
