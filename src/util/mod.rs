use std::fmt::{Display, Formatter};

pub mod fangraphs;
pub mod hitting;
pub mod pitching;
pub mod stat;

/// The two recoverable failures a query can hit. Anything the backend throws
/// at us collapses into `YearNotFound`, but the cause is kept around so a
/// transport failure is still tellable apart from an empty leaderboard.
#[derive(Debug)]
pub enum QueryError {
    InvalidYear,
    YearNotFound(anyhow::Error),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear => write!(f, "Error: Please Enter a Year"),
            Self::YearNotFound(_) => write!(f, "Error: Year Not Found. Please Enter Eligible Year"),
        }
    }
}

pub fn parse_year(input: &str) -> Result<i32, QueryError> {
    input.trim().parse().map_err(|_| QueryError::InvalidYear)
}

/// Turns raw name input into the exact-match key used against the
/// leaderboards: whitespace collapsed, every token capitalized.
pub fn normalize_name(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
