//! Board coordinates.
//!
//! Positions are 0-based `(x, y)` pairs. Players and logs use the
//! human-readable form: column letters followed by a 1-based row number,
//! with columns counted like spreadsheet columns (`A`..`Z`, `AA`, `AB`, ...).
//!
//! ```
//! use tank_rules::core::Position;
//!
//! let pos = Position::from_human_readable("C4").unwrap();
//! assert_eq!(pos, Position::new(2, 3));
//! assert_eq!(pos.to_string(), "C4");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};

const LETTERS: u32 = 26;

/// A square on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, 0-based.
    pub x: u32,
    /// Row, 0-based.
    pub y: u32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Parse a human-readable position such as `"A1"` or `"ab12"`.
    ///
    /// Letters are case-insensitive. The row number must be at least 1.
    pub fn from_human_readable(input: &str) -> Result<Self> {
        let invalid = || RuleError::InvalidPosition(input.to_string());

        let split = input
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(invalid)?;
        let (letters, digits) = input.split_at(split);
        if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut x: u32 = 0;
        for (i, c) in letters.bytes().enumerate() {
            let digit = u32::from(c.to_ascii_uppercase() - b'A');
            x = if i == 0 {
                digit
            } else {
                x.checked_add(1)
                    .and_then(|v| v.checked_mul(LETTERS))
                    .and_then(|v| v.checked_add(digit))
                    .ok_or_else(invalid)?
            };
        }

        let row: u32 = digits.parse().map_err(|_| invalid())?;
        let y = row.checked_sub(1).ok_or_else(invalid)?;

        Ok(Self { x, y })
    }

    /// Column letters for this position.
    #[must_use]
    pub fn column_letters(&self) -> String {
        let mut letters = Vec::new();
        let mut x = self.x;
        loop {
            // x % 26 < 26, so the cast cannot truncate.
            letters.push(b'A' + (x % LETTERS) as u8);
            let remaining = x / LETTERS;
            if remaining == 0 {
                break;
            }
            x = remaining - 1;
        }
        letters.iter().rev().map(|&b| char::from(b)).collect()
    }

    /// Human-readable form, e.g. `"A1"`.
    #[must_use]
    pub fn to_human_readable(&self) -> String {
        format!("{}{}", self.column_letters(), u64::from(self.y) + 1)
    }

    /// Distance to another position: the Euclidean distance rounded down.
    #[must_use]
    pub fn distance_to(&self, other: Position) -> u32 {
        let dx = u128::from(self.x.abs_diff(other.x));
        let dy = u128::from(self.y.abs_diff(other.y));
        let squared = dx * dx + dy * dy;

        let mut root = (squared as f64).sqrt() as u128;
        while root * root > squared {
            root -= 1;
        }
        while (root + 1) * (root + 1) <= squared {
            root += 1;
        }
        // Both deltas fit in u32, so the root does too.
        root as u32
    }
}

impl FromStr for Position {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_human_readable(s)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_human_readable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_letter() {
        assert_eq!(Position::from_human_readable("A1").unwrap(), Position::new(0, 0));
        assert_eq!(Position::from_human_readable("Z10").unwrap(), Position::new(25, 9));
        assert_eq!(Position::from_human_readable("c4").unwrap(), Position::new(2, 3));
    }

    #[test]
    fn test_parse_multiple_letters() {
        assert_eq!(Position::from_human_readable("AA1").unwrap(), Position::new(26, 0));
        assert_eq!(Position::from_human_readable("AZ2").unwrap(), Position::new(51, 1));
        assert_eq!(Position::from_human_readable("BA3").unwrap(), Position::new(52, 2));
    }

    #[test]
    fn test_human_readable_output() {
        assert_eq!(Position::new(0, 0).to_human_readable(), "A1");
        assert_eq!(Position::new(25, 0).to_human_readable(), "Z1");
        assert_eq!(Position::new(26, 4).to_human_readable(), "AA5");
        assert_eq!(Position::new(52, 2).to_string(), "BA3");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "A", "12", "A0", "1A", "A1B", "A-1", "Ä1"] {
            assert!(
                matches!(Position::from_human_readable(input), Err(RuleError::InvalidPosition(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_str() {
        let pos: Position = "B2".parse().unwrap();
        assert_eq!(pos, Position::new(1, 1));
    }

    #[test]
    fn test_distance() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.distance_to(origin), 0);
        assert_eq!(origin.distance_to(Position::new(3, 0)), 3);
        assert_eq!(origin.distance_to(Position::new(3, 4)), 5);
        // sqrt(2) rounds down to 1
        assert_eq!(origin.distance_to(Position::new(1, 1)), 1);
        // sqrt(8) rounds down to 2
        assert_eq!(Position::new(2, 2).distance_to(origin), 2);
    }
}
