//! The encoding engine.
//!
//! Each scheme is a small state machine run left to right over the bits.
//! The run is a fold: `(state, bit) -> (state, [first_half, second_half])`,
//! with the state scoped to a single call.
//!
//! # Rules
//!
//! | Scheme                  | `0`                    | `1`                      |
//! |-------------------------|------------------------|--------------------------|
//! | NRZ-L                   | (0, 0)                 | (1, 1)                   |
//! | NRZ-I                   | hold previous level    | toggle previous level    |
//! | Bipolar AMI             | (0, 0)                 | flip polarity, (p, p)    |
//! | Pseudoternary           | flip polarity, (p, p)  | (0, 0)                   |
//! | Manchester              | (0, 1)                 | (1, 0)                   |
//! | Differential Manchester | (prev, !prev)          | (!prev, prev)            |
//!
//! NRZ-I and Differential Manchester have no previous level for the first
//! bit: NRZ-I takes the bit at face value and Differential Manchester emits
//! (1, 0) for `0` and (0, 1) for `1`. The alternating codes start from
//! polarity -1, so the first pulse is +1.
//!
//! # Example
//! ```
//! use line_coding_core::encode_str;
//!
//! let signal = encode_str("1011", "Bipolar AMI").unwrap();
//! assert_eq!(signal.level_values(), vec![1, 1, 0, 0, -1, -1, 1, 1]);
//! ```

use crate::bits::{Bit, BitSequence};
use crate::error::Result;
use crate::scheme::EncodingScheme;
use crate::signal::{Signal, SignalLevel};

/// State carried from one bit to the next within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineState {
    /// Sign of the most recent pulse (AMI, Pseudoternary)
    last_polarity: SignalLevel,
    /// Final sub-level of the previous bit (NRZ-I, Differential Manchester)
    last_level: Option<SignalLevel>,
}

impl LineState {
    fn initial() -> Self {
        Self {
            last_polarity: SignalLevel::Negative,
            last_level: None,
        }
    }
}

/// Encode a validated bit sequence.
///
/// Infallible: a [`BitSequence`] is valid by construction. The output holds
/// exactly two levels per bit.
pub fn encode(bits: &BitSequence, scheme: EncodingScheme) -> Signal {
    let (_, levels) = bits.iter().fold(
        (LineState::initial(), Vec::with_capacity(2 * bits.len())),
        |(state, mut levels), bit| {
            let (next, [first, second]) = transition(scheme, state, bit);
            levels.push(first);
            levels.push(second);
            (next, levels)
        },
    );

    tracing::debug!(%scheme, %bits, levels = ?levels, "encoded bit sequence");

    Signal::new(scheme, bits.clone(), levels)
}

/// Encode raw text under a scheme given by name.
///
/// Both inputs are checked here even if the caller already validated them.
///
/// # Errors
/// - `Error::InvalidInput` if `bits` is empty, longer than 10, or non-binary
/// - `Error::UnknownScheme` if `scheme` names no supported line code
pub fn encode_str(bits: &str, scheme: &str) -> Result<Signal> {
    let bits = BitSequence::parse(bits)?;
    let scheme = EncodingScheme::from_name(scheme)?;
    Ok(encode(&bits, scheme))
}

/// Encode the same bits under every scheme, in [`EncodingScheme::ALL`] order.
pub fn encode_all(bits: &BitSequence) -> Vec<Signal> {
    EncodingScheme::ALL
        .into_iter()
        .map(|scheme| encode(bits, scheme))
        .collect()
}

fn transition(
    scheme: EncodingScheme,
    state: LineState,
    bit: Bit,
) -> (LineState, [SignalLevel; 2]) {
    match scheme {
        EncodingScheme::NrzL => {
            let level = SignalLevel::from_bit(bit);
            (state, [level, level])
        }

        EncodingScheme::NrzI => {
            let level = match state.last_level {
                None => SignalLevel::from_bit(bit),
                Some(prev) => SignalLevel::binary(is_high(prev) ^ bit.is_one()),
            };
            let next = LineState {
                last_level: Some(level),
                ..state
            };
            (next, [level, level])
        }

        EncodingScheme::BipolarAmi => alternate_mark(state, bit == Bit::One),

        EncodingScheme::Pseudoternary => alternate_mark(state, bit == Bit::Zero),

        EncodingScheme::Manchester => match bit {
            Bit::One => (state, [SignalLevel::Positive, SignalLevel::Zero]),
            Bit::Zero => (state, [SignalLevel::Zero, SignalLevel::Positive]),
        },

        EncodingScheme::DifferentialManchester => {
            let halves = match (state.last_level, bit) {
                (None, Bit::One) => [SignalLevel::Zero, SignalLevel::Positive],
                (None, Bit::Zero) => [SignalLevel::Positive, SignalLevel::Zero],
                (Some(prev), Bit::One) => {
                    let high = is_high(prev);
                    [SignalLevel::binary(!high), SignalLevel::binary(high)]
                }
                (Some(prev), Bit::Zero) => {
                    let high = is_high(prev);
                    [SignalLevel::binary(high), SignalLevel::binary(!high)]
                }
            };
            let next = LineState {
                last_level: Some(halves[1]),
                ..state
            };
            (next, halves)
        }
    }
}

/// Shared rule of AMI and Pseudoternary: a marked bit flips the polarity and
/// emits it for the whole interval, an unmarked bit emits zero.
fn alternate_mark(state: LineState, marked: bool) -> (LineState, [SignalLevel; 2]) {
    if marked {
        let polarity = state.last_polarity.flip_polarity();
        let next = LineState {
            last_polarity: polarity,
            ..state
        };
        (next, [polarity, polarity])
    } else {
        (state, [SignalLevel::Zero, SignalLevel::Zero])
    }
}

fn is_high(level: SignalLevel) -> bool {
    level == SignalLevel::Positive
}
