//! Grammar for data placeholders.
//!
//! A token is a whole input string wrapped in angle brackets, for example
//! `<TODAY+2>`, `<DOB -20Y>` or `<UNIQUEID7>`. Keywords are matched without
//! regard to ASCII case. Inputs that do not match the grammar are rejected
//! so the caller can hand the original text back unchanged.

/// Identifier length produced by a bare `<UNIQUEID>` token.
pub const DEFAULT_UNIQUE_ID_LENGTH: usize = 12;

const TODAY_KEYWORD: &str = "TODAY";
const DATE_OF_BIRTH_KEYWORD: &str = "DOB";
const UNIQUE_ID_KEYWORD: &str = "UNIQUEID";
const FIRST_NAME_KEYWORD: &str = "FIRSTNAME";
const LAST_NAME_KEYWORD: &str = "LASTNAME";

/// Direction of a signed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `+N`: later than the reference date.
    Forward,
    /// `-N`: earlier than the reference date.
    Backward,
}

/// A signed offset parsed from a token such as `<TODAY-2>`.
///
/// The unit (days or years) is implied by the token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Whether the offset moves forwards or backwards in time.
    pub direction: Direction,
    /// Magnitude of the offset.
    pub amount: u64,
}

impl Offset {
    /// The offset used when a token carries no `+N`/`-N` suffix.
    pub const ZERO: Self = Self::forward(0);

    /// Builds a forward offset.
    #[must_use]
    pub const fn forward(amount: u64) -> Self {
        Self {
            direction: Direction::Forward,
            amount,
        }
    }

    /// Builds a backward offset.
    #[must_use]
    pub const fn backward(amount: u64) -> Self {
        Self {
            direction: Direction::Backward,
            amount,
        }
    }
}

/// A recognised data token.
///
/// # Example
///
/// ```
/// use data_tokens::{Offset, Token};
///
/// assert_eq!(Token::parse("<TODAY+2>"), Some(Token::Today(Offset::forward(2))));
/// assert_eq!(Token::parse("<dob -20y>"), Some(Token::DateOfBirth(Offset::backward(20))));
/// assert_eq!(Token::parse("<UNIQUEID7>"), Some(Token::UniqueId(7)));
/// assert_eq!(Token::parse("04/03/2003"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Current date shifted by whole days.
    Today(Offset),
    /// Synthetic birth date: the current date shifted by whole years.
    DateOfBirth(Offset),
    /// Random alphanumeric identifier of the given length.
    UniqueId(usize),
    /// Random first name.
    FirstName,
    /// Random last name.
    LastName,
}

impl Token {
    /// Classifies a complete input string.
    ///
    /// Returns `None` unless the entire input is a single bracketed token
    /// with a recognised interior. Numeric parts that overflow, a zero
    /// identifier length, and unknown keywords all yield `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let interior = input.strip_prefix('<')?.strip_suffix('>')?;
        Self::parse_interior(interior)
    }

    fn parse_interior(interior: &str) -> Option<Self> {
        if let Some(rest) = strip_keyword(interior, UNIQUE_ID_KEYWORD) {
            return parse_unique_id_length(rest).map(Self::UniqueId);
        }
        if let Some(rest) = strip_keyword(interior, TODAY_KEYWORD) {
            return parse_day_offset(rest).map(Self::Today);
        }
        if let Some(rest) = strip_keyword(interior, DATE_OF_BIRTH_KEYWORD) {
            return parse_year_offset(rest).map(Self::DateOfBirth);
        }
        if interior.eq_ignore_ascii_case(FIRST_NAME_KEYWORD) {
            return Some(Self::FirstName);
        }
        if interior.eq_ignore_ascii_case(LAST_NAME_KEYWORD) {
            return Some(Self::LastName);
        }
        None
    }
}

/// Strips `keyword` from the front of `interior`, ignoring ASCII case.
fn strip_keyword<'a>(interior: &'a str, keyword: &str) -> Option<&'a str> {
    let head = interior.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        interior.get(keyword.len()..)
    } else {
        None
    }
}

/// Digits must follow `UNIQUEID` directly; no sign, no whitespace.
fn parse_unique_id_length(rest: &str) -> Option<usize> {
    if rest.is_empty() {
        return Some(DEFAULT_UNIQUE_ID_LENGTH);
    }
    let length = usize::try_from(parse_amount(rest)?).ok()?;
    (length > 0).then_some(length)
}

fn parse_day_offset(rest: &str) -> Option<Offset> {
    if rest.is_empty() {
        return Some(Offset::ZERO);
    }
    let (direction, digits) = split_sign(rest)?;
    Some(Offset {
        direction,
        amount: parse_amount(digits)?,
    })
}

fn parse_year_offset(rest: &str) -> Option<Offset> {
    if rest.is_empty() {
        return Some(Offset::ZERO);
    }
    let (direction, body) = split_sign(rest)?;
    let digits = body.strip_suffix('Y').or_else(|| body.strip_suffix('y'))?;
    Some(Offset {
        direction,
        amount: parse_amount(digits)?,
    })
}

/// Accepts optional leading whitespace, then a mandatory `+` or `-`.
fn split_sign(rest: &str) -> Option<(Direction, &str)> {
    let trimmed = rest.trim_start();
    trimmed
        .strip_prefix('+')
        .map(|digits| (Direction::Forward, digits))
        .or_else(|| {
            trimmed
                .strip_prefix('-')
                .map(|digits| (Direction::Backward, digits))
        })
}

/// Parses one or more ASCII digits. `str::parse` alone would accept a sign.
fn parse_amount(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
