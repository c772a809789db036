//! Encoded signal representation and the plot geometry derived from it.
//!
//! Every bit occupies two sub-levels, one per half of its interval:
//!
//! ```text
//!   bit i:  [i, i+0.5) -> levels[2i]
//!           [i+0.5, i+1) -> levels[2i+1]
//! ```
//!
//! Full-width schemes (NRZ, AMI, Pseudoternary) duplicate the level across
//! both halves. A renderer draws the result as a post-step function with
//! y-limits [`Y_LIMITS`], y-ticks [`Y_TICKS`] and one bit label per interval.

use std::fmt;

use crate::bits::{Bit, BitSequence};
use crate::scheme::EncodingScheme;

/// Vertical plot bounds, leaving room around the -1/0/+1 levels.
pub const Y_LIMITS: (f64, f64) = (-1.5, 1.5);

/// Vertical tick marks, one per representable level.
pub const Y_TICKS: [i8; 3] = [-1, 0, 1];

/// Vertical gap between a bit label and its anchor level.
pub const LABEL_OFFSET: f64 = 0.1;

/// A discrete signal level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignalLevel {
    Negative,
    Zero,
    Positive,
}

impl SignalLevel {
    pub fn value(self) -> i8 {
        match self {
            SignalLevel::Negative => -1,
            SignalLevel::Zero => 0,
            SignalLevel::Positive => 1,
        }
    }

    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            -1 => Some(SignalLevel::Negative),
            0 => Some(SignalLevel::Zero),
            1 => Some(SignalLevel::Positive),
            _ => None,
        }
    }

    /// Level of a binary scheme: `1` is high, `0` is low.
    pub fn from_bit(bit: Bit) -> Self {
        Self::binary(bit.is_one())
    }

    pub fn binary(high: bool) -> Self {
        if high {
            SignalLevel::Positive
        } else {
            SignalLevel::Zero
        }
    }

    /// Sign flip used by the alternating (AMI-style) codes. Zero is fixed.
    pub fn flip_polarity(self) -> Self {
        match self {
            SignalLevel::Negative => SignalLevel::Positive,
            SignalLevel::Zero => SignalLevel::Zero,
            SignalLevel::Positive => SignalLevel::Negative,
        }
    }

    pub fn is_zero(self) -> bool {
        self == SignalLevel::Zero
    }
}

impl fmt::Display for SignalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalLevel::Negative => f.write_str("-1"),
            SignalLevel::Zero => f.write_str("0"),
            SignalLevel::Positive => f.write_str("+1"),
        }
    }
}

/// A constant level over the half-open interval `[start, end)`, in bit units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub start: f64,
    pub end: f64,
    pub level: SignalLevel,
}

impl Step {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Where a bit label goes on the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitAnnotation {
    /// Horizontal center of the bit interval
    pub x: f64,
    /// Baseline of the label, [`LABEL_OFFSET`] above its anchor level
    pub y: f64,
    pub bit: Bit,
}

/// Result of one encoding run.
///
/// # Invariants
/// - `levels.len() == 2 * bits.len()`
/// - binary schemes only use `Zero` and `Positive`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    scheme: EncodingScheme,
    bits: BitSequence,
    levels: Vec<SignalLevel>,
}

impl Signal {
    pub(crate) fn new(scheme: EncodingScheme, bits: BitSequence, levels: Vec<SignalLevel>) -> Self {
        debug_assert_eq!(levels.len(), 2 * bits.len());
        Self {
            scheme,
            bits,
            levels,
        }
    }

    pub fn scheme(&self) -> EncodingScheme {
        self.scheme
    }

    pub fn bits(&self) -> &BitSequence {
        &self.bits
    }

    /// All sub-levels, two per bit.
    pub fn levels(&self) -> &[SignalLevel] {
        &self.levels
    }

    /// Sub-levels as plain integers in `{-1, 0, 1}`.
    pub fn level_values(&self) -> Vec<i8> {
        self.levels.iter().map(|l| l.value()).collect()
    }

    /// The two sub-levels of bit `index`.
    pub fn bit_levels(&self, index: usize) -> Option<(SignalLevel, SignalLevel)> {
        let first = *self.levels.get(2 * index)?;
        let second = *self.levels.get(2 * index + 1)?;
        Some((first, second))
    }

    /// Signal duration in bit intervals.
    pub fn duration(&self) -> usize {
        self.bits.len()
    }

    /// Half-width steps covering `[0, duration)`.
    pub fn steps(&self) -> Vec<Step> {
        self.levels
            .iter()
            .enumerate()
            .map(|(i, &level)| {
                let start = i as f64 * 0.5;
                Step {
                    start,
                    end: start + 0.5,
                    level,
                }
            })
            .collect()
    }

    /// Vertices of the post-step plot: the start of each step, then a
    /// terminal vertex at `t = duration` holding the last level.
    ///
    /// There is no settle level; the signal ends at the last sub-level.
    pub fn plot_points(&self) -> Vec<(f64, SignalLevel)> {
        let steps = self.steps();
        let mut points: Vec<_> = steps.iter().map(|s| (s.start, s.level)).collect();
        if let Some(last) = steps.last() {
            points.push((last.end, last.level));
        }
        points
    }

    /// One label per bit, centered on its interval.
    ///
    /// Binary schemes anchor the label on the bit value; ternary schemes
    /// anchor it on the first sub-level so it sits just above the pulse.
    pub fn annotations(&self) -> Vec<BitAnnotation> {
        self.bits
            .iter()
            .enumerate()
            .map(|(i, bit)| {
                let anchor = if self.scheme.is_ternary() {
                    self.levels[2 * i].value()
                } else {
                    bit.value() as i8
                };
                BitAnnotation {
                    x: i as f64 + 0.5,
                    y: f64::from(anchor) + LABEL_OFFSET,
                    bit,
                }
            })
            .collect()
    }

    /// Horizontal tick marks at every bit boundary, `0..=duration`.
    pub fn x_ticks(&self) -> Vec<usize> {
        (0..=self.duration()).collect()
    }

    pub fn title(&self) -> String {
        format!("Digital Signal: {} Encoding", self.scheme)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]:", self.scheme, self.bits)?;
        for (i, pair) in self.levels.chunks_exact(2).enumerate() {
            let sep = if i == 0 { " " } else { " | " };
            write!(f, "{}{} {}", sep, pair[0], pair[1])?;
        }
        Ok(())
    }
}
