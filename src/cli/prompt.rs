//! Line input for the interactive menu.
//!
//! `LineSource` is the seam between the menu and the terminal: the real
//! implementation uses rustyline, tests feed a scripted list of lines.

use crate::errors::{AppError, AppResult};
use crate::models::Budget;
use crate::ui::messages::warning;
use crate::utils::date::{format_hint, parse_date};
use crate::utils::formatting::validate_detail;
use chrono::NaiveDate;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;

/// Outcome of reading one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D / end of input
    Eof,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> AppResult<Line>;
}

pub struct ReadlineSource {
    editor: DefaultEditor,
}

impl ReadlineSource {
    pub fn new() -> AppResult<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| AppError::Prompt(format!("failed to initialize readline: {}", e)))?;
        Ok(Self { editor })
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self, prompt: &str) -> AppResult<Line> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(e) = self.editor.add_history_entry(line.as_str())
                {
                    warning(format!("Could not record history: {}", e));
                }
                Ok(Line::Text(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(e) => Err(AppError::Prompt(e.to_string())),
        }
    }
}

/// Pre-recorded input; runs out as `Eof`.
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, _prompt: &str) -> AppResult<Line> {
        Ok(match self.lines.pop_front() {
            Some(l) => Line::Text(l),
            None => Line::Eof,
        })
    }
}

/// Ask until `parse` accepts the answer. `None` means the user cancelled.
pub fn ask<T, F>(src: &mut dyn LineSource, label: &str, mut parse: F) -> AppResult<Option<T>>
where
    F: FnMut(&str) -> AppResult<T>,
{
    loop {
        let text = match src.read_line(&format!("{}: ", label))? {
            Line::Text(t) => t,
            Line::Interrupted | Line::Eof => return Ok(None),
        };

        match parse(text.trim()) {
            Ok(v) => return Ok(Some(v)),
            Err(e) if e.is_validation() => warning(e),
            Err(e) => return Err(e),
        }
    }
}

pub fn ask_text(src: &mut dyn LineSource, label: &str) -> AppResult<Option<String>> {
    ask(src, label, |s| {
        if s.is_empty() {
            Err(AppError::InvalidDetail(format!("{} cannot be empty", label)))
        } else {
            Ok(s.to_string())
        }
    })
}

pub fn ask_date(
    src: &mut dyn LineSource,
    label: &str,
    format: &str,
) -> AppResult<Option<NaiveDate>> {
    let label = format!("{} ({})", label, format_hint(format));
    ask(src, &label, |s| parse_date(s, format))
}

pub fn ask_budget(src: &mut dyn LineSource, label: &str) -> AppResult<Option<Budget>> {
    ask(src, label, |s| s.parse::<Budget>())
}

/// Free text detail, possibly empty, capped at `max_len` characters.
pub fn ask_detail(
    src: &mut dyn LineSource,
    label: &str,
    max_len: usize,
) -> AppResult<Option<String>> {
    ask(src, label, |s| {
        validate_detail(label, s, max_len)?;
        Ok(s.to_string())
    })
}

/// Show a numbered list and return the 0-based index of the chosen item.
pub fn select(
    src: &mut dyn LineSource,
    label: &str,
    items: &[String],
) -> AppResult<Option<usize>> {
    if items.is_empty() {
        return Err(AppError::InvalidSelection(format!("nothing to choose for '{}'", label)));
    }

    println!("{}:", label);
    for (i, item) in items.iter().enumerate() {
        println!("  {:>2}) {}", i + 1, item);
    }

    ask(src, "Choice", |s| match s.parse::<usize>() {
        Ok(n) if (1..=items.len()).contains(&n) => Ok(n - 1),
        _ => Err(AppError::InvalidSelection(format!(
            "'{}' is not a number between 1 and {}",
            s,
            items.len()
        ))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_reprompts_until_valid() {
        let mut src = ScriptedSource::new(["abc", "12.5"]);
        let b = ask_budget(&mut src, "Budget").unwrap();
        assert_eq!(b, Some(Budget::from_cents(1250)));
    }

    #[test]
    fn eof_cancels() {
        let mut src = ScriptedSource::new(["not a date"]);
        assert_eq!(ask_date(&mut src, "Start", "%m-%d-%Y").unwrap(), None);
    }

    #[test]
    fn detail_rejects_long_text_then_accepts() {
        let mut src = ScriptedSource::new(["this line is far too long to fit", "short", ""]);
        assert_eq!(
            ask_detail(&mut src, "Hotel", 20).unwrap().as_deref(),
            Some("short")
        );
        assert_eq!(ask_detail(&mut src, "Hotel", 20).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn select_is_one_based() {
        let items = vec!["Paris".to_string(), "Rome".to_string()];
        let mut src = ScriptedSource::new(["0", "3", "x", "2"]);
        assert_eq!(select(&mut src, "Trip", &items).unwrap(), Some(1));
    }

    #[test]
    fn select_on_empty_list_is_an_error() {
        let mut src = ScriptedSource::new(["1"]);
        assert!(select(&mut src, "Trip", &[]).is_err());
    }
}
