//! Line parsing for the interactive session.

use std::str::FromStr;
use thiserror::Error;

/// Top-level menu choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Sell,
    Restock,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid selection. Please choose: Sell, Restock, or Exit")]
pub struct ParseCommandError;

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sell" => Ok(Self::Sell),
            "restock" => Ok(Self::Restock),
            "exit" => Ok(Self::Exit),
            _ => Err(ParseCommandError),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseNumberError {
    #[error("no digits")]
    Empty,
    #[error("non-digit character {0:?}")]
    InvalidDigit(char),
    #[error("number too large")]
    Overflow,
}

/// Parses a line made only of ASCII digits (surrounding whitespace aside).
/// Signs, decimal points and any other character are rejected.
pub fn parse_number(input: &str) -> Result<i64, ParseNumberError> {
    let digits = input.trim();
    if digits.is_empty() {
        return Err(ParseNumberError::Empty);
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseNumberError::InvalidDigit(c));
    }
    digits.parse().map_err(|_| ParseNumberError::Overflow)
}

/// Maps a 1-based menu number to a 0-based index into a list of `len` items.
pub fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let n = usize::try_from(parse_number(input).ok()?).ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}
