//! Terminal prompts and menus.

use colored::Colorize;
use ghostctl_core::error::Result;
use ghostctl_core::prompt::Prompter;
use std::io::{self, BufRead, Write};

/// Prompter that talks to the controlling terminal.
///
/// When stdin is not a terminal, menus abort and confirmations answer
/// no, so a piped invocation terminates cleanly instead of hanging.
pub struct TermPrompter {
    interactive: bool,
}

impl TermPrompter {
    /// Create a prompter, detecting whether stdin is a terminal.
    pub fn new() -> Self {
        Self {
            interactive: atty::is(atty::Stream::Stdin),
        }
    }

    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn show(&mut self, message: &str) {
        println!("{}", message.trim_end());
    }

    fn select_one(&mut self, title: &str, labels: &[String]) -> Result<Option<usize>> {
        if labels.is_empty() || !self.interactive {
            return Ok(None);
        }

        println!();
        println!("{}", title.cyan().bold());
        for (index, label) in labels.iter().enumerate() {
            println!("  {:>3}) {}", index + 1, label);
        }

        loop {
            print!("Enter a number (or q to quit): ");
            io::stdout().flush()?;

            let line = self.read_line()?;
            if line.is_empty() || line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }

            match line.parse::<usize>() {
                Ok(n) if (1..=labels.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => println!(
                    "{}",
                    format!("Pick a number between 1 and {}", labels.len()).yellow()
                ),
            }
        }
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        if !self.interactive {
            return Ok(false);
        }

        print!("{} [y/N]: ", message);
        io::stdout().flush()?;

        let line = self.read_line()?;
        Ok(matches!(line.to_lowercase().as_str(), "y" | "yes"))
    }
}
