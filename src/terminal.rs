//! Terminal-backed collaborators for the command line front end.

use std::io::{self, IsTerminal, Write};

use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::indicator::IndicatorSink;
use crate::profile::{ChoiceItem, ChoicePresenter};

/// Numbered list on stdout, answer read from stdin. An empty answer cancels.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl ChoicePresenter for TerminalPresenter {
    async fn pick(&self, placeholder: &str, items: &[ChoiceItem]) -> AppResult<Option<usize>> {
        if !io::stdin().is_terminal() {
            return Err(AppError::Config(
                "profile selection needs an interactive terminal. use `cpyprofile use <NAME>` instead"
                    .to_string(),
            ));
        }

        if items.is_empty() {
            println!("no profiles available");
            return Ok(None);
        }

        println!("{placeholder}");
        for (index, item) in items.iter().enumerate() {
            println!("{}. {} ({})", index + 1, item.label, item.description);
        }

        loop {
            let answer = prompt_line("profile number (empty to cancel): ")?;
            if answer.is_empty() {
                return Ok(None);
            }

            match parse_choice(&answer, items.len()) {
                Some(index) => return Ok(Some(index)),
                None => eprintln!("enter a number between 1 and {}", items.len()),
            }
        }
    }
}

fn parse_choice(answer: &str, len: usize) -> Option<usize> {
    let number: usize = answer.parse().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}

fn prompt_line(prompt: &str) -> AppResult<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

/// Indicator sink that only traces; the command prints the final text itself.
#[derive(Debug, Default)]
pub struct ConsoleIndicator {
    next_id: u32,
}

impl IndicatorSink for ConsoleIndicator {
    type Handle = u32;

    fn create_indicator(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn set_text(&mut self, handle: &u32, text: &str) {
        debug!(indicator = handle, text, "indicator text set");
    }

    fn show(&mut self, handle: &u32) {
        debug!(indicator = handle, "indicator shown");
    }

    fn dispose(&mut self, handle: u32) {
        debug!(indicator = handle, "indicator disposed");
    }
}
