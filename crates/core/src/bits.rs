//! Bit messages accepted by the encoder.
//!
//! A [`BitSequence`] can only be constructed valid: 1 to [`MAX_BITS`] bits,
//! parsed from text over the alphabet `{'0', '1'}`. Invalid text is rejected
//! with an [`InputError`], never truncated or corrected.
//!
//! # Example
//! ```
//! use line_coding_core::bits::{Bit, BitSequence};
//!
//! let bits: BitSequence = "1011".parse().unwrap();
//! assert_eq!(bits.len(), 4);
//! assert_eq!(bits.get(1), Some(Bit::Zero));
//! assert_eq!(bits.to_string(), "1011");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InputError, Result};

/// Maximum number of bits in a single encoding run.
pub const MAX_BITS: usize = 10;

/// A single binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Parse a bit from its character form.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    pub fn is_one(self) -> bool {
        self == Bit::One
    }

    /// Numeric value, 0 or 1.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Ordered, non-empty sequence of at most [`MAX_BITS`] bits.
///
/// # Invariants
/// - `1 <= bits.len() <= MAX_BITS`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSequence {
    bits: Vec<Bit>,
}

impl BitSequence {
    /// Build a sequence from already-typed bits.
    ///
    /// # Errors
    /// - `InputError::Empty` if `bits` is empty
    /// - `InputError::TooLong` if `bits` has more than `MAX_BITS` entries
    pub fn new(bits: Vec<Bit>) -> Result<Self> {
        check_len(bits.len())?;
        Ok(Self { bits })
    }

    /// Parse a sequence from text.
    ///
    /// Length is checked before the alphabet, so an over-long message is
    /// reported as too long even if it also contains stray characters.
    ///
    /// # Errors
    /// - `InputError::Empty`, `InputError::TooLong` for length violations
    /// - `InputError::InvalidCharacter` for the first non-binary character
    pub fn parse(text: &str) -> Result<Self> {
        check_len(text.chars().count())?;

        let bits = text
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                Bit::from_char(ch).ok_or(InputError::InvalidCharacter { ch, position })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Never true for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Bit> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Bit> + '_ {
        self.bits.iter().copied()
    }

    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    /// Number of `1` bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|b| b.is_one()).count()
    }

    /// Number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }
}

fn check_len(len: usize) -> Result<()> {
    if len == 0 {
        return Err(InputError::Empty.into());
    }
    if len > MAX_BITS {
        return Err(InputError::TooLong { len, max: MAX_BITS }.into());
    }
    Ok(())
}

impl FromStr for BitSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = Bit;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Bit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter().copied()
    }
}
