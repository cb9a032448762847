//! Coordinate codec: letter-row/number-column text to zero-based indices.
//!
//! "A1" addresses row 0, column 0; "c7" addresses row 2, column 6. Parsing is
//! case-insensitive and pure; validity is always judged against a concrete
//! grid size, never standalone.

use crate::error::Error;
use crate::types::Coordinate;

impl Coordinate {
    /// Parse a user-entered cell reference against a grid of `grid_size`.
    ///
    /// The accepted shape is exactly one ASCII letter followed by one or more
    /// ASCII digits, with surrounding whitespace tolerated. The letter is the
    /// row (A maps to 0), the digits are the 1-based column. Multi-letter
    /// rows ("AA1") are rejected: single letters cover every size the grid
    /// supports, so anything longer is malformed input rather than a larger
    /// address space.
    pub fn parse(text: &str, grid_size: usize) -> Result<Self, Error> {
        let trimmed = text.trim();

        let malformed = || Error::MalformedCoordinate {
            input: text.to_string(),
        };

        let letters: &str = {
            let end = trimmed
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(trimmed.len());
            &trimmed[..end]
        };
        let digits = &trimmed[letters.len()..];

        if letters.len() != 1 || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let row = (letters.as_bytes()[0].to_ascii_uppercase() - b'A') as usize;
        let number: usize = digits.parse().map_err(|_| malformed())?;
        if number == 0 {
            return Err(malformed());
        }
        let col = number - 1;

        if row >= grid_size || col >= grid_size {
            return Err(Error::OutOfBounds {
                input: text.to_string(),
                size: grid_size,
            });
        }

        Ok(Self { row, col })
    }
}
