//! Parser for textual node intervals.
//!
//! An interval is written `<start>-<end>` and expands to an ordered list of
//! node labels. Two forms are accepted:
//!
//! - **Letters** - `a-e` or `A-Z`, both bounds single ASCII letters of the same case
//! - **Integers** - `1-9`, `12-102`, both bounds base-10 unsigned integers
//!
//! # Example
//!
//! ```
//! use graphkit::interval;
//!
//! assert_eq!(interval::parse("a-d").unwrap(), vec!["a", "b", "c", "d"]);
//! assert_eq!(interval::parse("8-11").unwrap(), vec!["8", "9", "10", "11"]);
//! assert!(interval::parse("a-9").is_err());
//! ```

use crate::error::{GraphError, GraphResult};

/// Expands an interval into its node labels, in ascending order.
///
/// Surrounding whitespace is ignored. The start bound must not be greater
/// than the end bound.
pub fn parse(text: &str) -> GraphResult<Vec<String>> {
    let trimmed = text.trim();
    let invalid = || GraphError::InvalidInterval(text.to_string());

    let (start, end) = trimmed.split_once('-').ok_or_else(invalid)?;

    if let (Some(from), Some(to)) = (single_letter(start), single_letter(end)) {
        if from.is_ascii_lowercase() != to.is_ascii_lowercase() || from > to {
            return Err(invalid());
        }
        return Ok((from..=to).map(|c| c.to_string()).collect());
    }

    let (from, to) = match (number(start), number(end)) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err(invalid()),
    };
    if from > to {
        return Err(invalid());
    }

    Ok((from..=to).map(|n| n.to_string()).collect())
}

fn single_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

fn number(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
