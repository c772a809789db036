//! line-coding-core: physical-layer line encoding of short bit messages
//!
//! This library turns a message of 1 to 10 bits into the sequence of signal
//! levels produced by one of six classic line codes:
//! - NRZ-L and NRZ-I (two-level, non-return-to-zero)
//! - Bipolar AMI and Pseudoternary (three-level, alternating polarity)
//! - Manchester and Differential Manchester (self-clocking, biphase)
//!
//! # Architecture
//!
//! - `bits`: validated bit messages
//! - `scheme`: the closed set of line codes
//! - `encoder`: the per-scheme state machines
//! - `signal`: encoder output and the plot geometry derived from it
//! - `metrics`: transition, DC and polarity statistics of a signal
//! - `error`: structured errors
//!
//! # Design Principles
//!
//! - **No panics**: invalid input is reported as an [`Error`], never corrected
//! - **Pure**: encoding has no side effects and carries no state across calls
//! - **All or nothing**: a run yields a complete signal or an error
//!
//! # Example
//! ```
//! use line_coding_core::{encode, BitSequence, EncodingScheme};
//!
//! let bits: BitSequence = "10".parse().unwrap();
//! let signal = encode(&bits, EncodingScheme::Manchester);
//! assert_eq!(signal.level_values(), vec![1, 0, 0, 1]);
//! ```

pub mod bits;
pub mod encoder;
pub mod error;
pub mod metrics;
pub mod scheme;
pub mod signal;

// Re-export commonly used types
pub use bits::{Bit, BitSequence, MAX_BITS};
pub use encoder::{encode, encode_all, encode_str};
pub use error::{Error, InputError, Result};
pub use metrics::SignalMetrics;
pub use scheme::EncodingScheme;
pub use signal::{BitAnnotation, Signal, SignalLevel, Step};
