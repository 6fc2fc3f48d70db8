//! Parsing of typed menu answers and line-oriented prompting.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::error::GameError;

/// Top-level town menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Explore,
    Shop,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Explore),
            "2" => Ok(MenuChoice::Shop),
            "3" => Ok(MenuChoice::Quit),
            other => Err(GameError::InvalidAction(other.to_string())),
        }
    }
}

/// Only an explicit "yes" (any case) counts as agreement.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Writes `prompt` and reads one line. Returns `None` at end of input.
pub fn prompt_line<I, O>(input: &mut I, out: &mut O, prompt: &str) -> io::Result<Option<String>>
where
    I: BufRead,
    O: Write,
{
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
