//! Configuration for the line-coding application.
//!
//! Parses command-line arguments and resolves defaults. With no bit message
//! the tool generates one from a seed; the seed is printed so runs are
//! reproducible.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using sensible defaults.

use clap::Parser;
use line_coding_core::{BitSequence, EncodingScheme, Error, InputError, MAX_BITS};

use crate::input_gen::generate_message;

/// Default columns per half-bit in the terminal plot.
pub const DEFAULT_HALF_WIDTH: usize = 3;

/// Narrowest half-bit the plot can draw without labels colliding with edges.
pub const MIN_HALF_WIDTH: usize = 2;

/// Widest half-bit the plot accepts.
pub const MAX_HALF_WIDTH: usize = 16;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "line-coding")]
#[command(about = "Encode a short bit message with a line code and plot the signal")]
#[command(after_help = "EXAMPLES:\n    \
    line-coding 1011                          # NRZ-L\n    \
    line-coding 1011 --scheme \"Bipolar AMI\"   # one scheme\n    \
    line-coding 0100110 --all                 # all six schemes\n    \
    line-coding --seed 42                     # random message, reproducible")]
pub struct Cli {
    /// Bit message, 1 to 10 characters of '0' and '1' (default: random)
    pub bits: Option<String>,

    /// Line code: NRZ-L, NRZ-I, "Bipolar AMI", Pseudoternary, Manchester,
    /// "Differential Manchester"
    #[arg(short, long, default_value = "NRZ-L")]
    pub scheme: EncodingScheme,

    /// Encode with all six schemes
    #[arg(long, conflicts_with = "scheme")]
    pub all: bool,

    /// Random seed for the generated message
    #[arg(long)]
    pub seed: Option<u64>,

    /// Length of the generated message (default: random 1-10)
    #[arg(long, conflicts_with = "bits")]
    pub random_len: Option<usize>,

    /// Plot columns per half-bit
    #[arg(long, default_value_t = DEFAULT_HALF_WIDTH)]
    pub half_width: usize,

    /// Print the level sequence instead of a plot
    #[arg(long)]
    pub no_plot: bool,

    /// Don't print signal metrics
    #[arg(long)]
    pub no_metrics: bool,

    /// Print resolved configuration
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where the bit message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    /// Given on the command line
    Argument,
    /// Generated from the seed
    Generated,
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Message ===
    /// Validated bit message
    pub bits: BitSequence,

    /// Where `bits` came from
    pub source: MessageSource,

    /// Seed used for generation (recorded even when unused)
    pub seed: u64,

    // === Encoding ===
    /// Schemes to run, in order
    pub schemes: Vec<EncodingScheme>,

    // === Output ===
    /// Columns per half-bit in the plot
    pub half_width: usize,

    /// Draw the step plot
    pub plot: bool,

    /// Print metrics for each signal
    pub print_metrics: bool,

    /// Print detailed config
    pub print_config: bool,
}

impl Config {
    /// Resolve parsed arguments into a configuration.
    ///
    /// # Errors
    /// Returns a user-facing message if the bit message or a numeric option
    /// is out of range.
    pub fn from_cli(cli: Cli) -> Result<Self, String> {
        if !(MIN_HALF_WIDTH..=MAX_HALF_WIDTH).contains(&cli.half_width) {
            return Err(format!(
                "--half-width must be between {} and {}",
                MIN_HALF_WIDTH, MAX_HALF_WIDTH
            ));
        }

        // Determine seed (explicit or time-based)
        let seed = cli.seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let (bits, source) = match cli.bits {
            Some(text) => (validate_message(&text)?, MessageSource::Argument),
            None => {
                if let Some(len) = cli.random_len {
                    if !(1..=MAX_BITS).contains(&len) {
                        return Err(format!("--random-len must be between 1 and {}", MAX_BITS));
                    }
                }
                let bits = generate_message(seed, cli.random_len).map_err(|e| e.to_string())?;
                (bits, MessageSource::Generated)
            }
        };

        let schemes = if cli.all {
            EncodingScheme::ALL.to_vec()
        } else {
            vec![cli.scheme]
        };

        Ok(Config {
            bits,
            source,
            seed,
            schemes,
            half_width: cli.half_width,
            plot: !cli.no_plot,
            print_metrics: !cli.no_metrics,
            print_config: cli.print_config,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match self.source {
            MessageSource::Argument => println!("Message: {} ({} bits)", self.bits, self.bits.len()),
            MessageSource::Generated => println!(
                "Message: {} ({} bits, generated with seed {})",
                self.bits,
                self.bits.len(),
                self.seed
            ),
        }
        let names: Vec<_> = self.schemes.iter().map(|s| s.name()).collect();
        println!("Schemes: {}", names.join(", "));
        println!("Plot: {}", if self.plot { "on" } else { "off" });
        println!("Half-bit width: {} columns", self.half_width);
        println!();
    }
}

/// Check a typed-in message and explain what is wrong with it.
///
/// This is the front-end validator; the engine checks again on its own.
pub fn validate_message(text: &str) -> Result<BitSequence, String> {
    BitSequence::parse(text).map_err(|err| match err {
        Error::InvalidInput(InputError::Empty) => "Input must contain at least 1 bit.".to_string(),
        Error::InvalidInput(InputError::TooLong { max, .. }) => {
            format!("Input must be a maximum of {} bits.", max)
        }
        Error::InvalidInput(InputError::InvalidCharacter { .. }) => {
            "Input must be binary (only 0s and 1s).".to_string()
        }
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, String> {
        let cli = Cli::try_parse_from(args.iter().copied()).map_err(|e| e.to_string())?;
        Config::from_cli(cli)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["line-coding", "1011"]).unwrap();
        assert_eq!(config.bits.to_string(), "1011");
        assert_eq!(config.source, MessageSource::Argument);
        assert_eq!(config.schemes, vec![EncodingScheme::NrzL]);
        assert_eq!(config.half_width, DEFAULT_HALF_WIDTH);
        assert!(config.plot);
        assert!(config.print_metrics);
        assert!(!config.print_config);
    }

    #[test]
    fn test_scheme_by_name() {
        let config =
            parse(&["line-coding", "1011", "--scheme", "Differential Manchester"])
                .unwrap();
        assert_eq!(config.schemes, vec![EncodingScheme::DifferentialManchester]);

        let config = parse(&["line-coding", "1011", "-s", "bipolar-ami"]).unwrap();
        assert_eq!(config.schemes, vec![EncodingScheme::BipolarAmi]);
    }

    #[test]
    fn test_unknown_scheme_rejected() {
        let err = parse(&["line-coding", "1011", "--scheme", "MLT-3"]).unwrap_err();
        assert!(err.contains("unknown encoding scheme"), "{err}");
    }

    #[test]
    fn test_all_schemes() {
        let config = parse(&["line-coding", "10", "--all"]).unwrap();
        assert_eq!(config.schemes, EncodingScheme::ALL.to_vec());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            parse(&["line-coding", "10101010101"]).unwrap_err(),
            "Input must be a maximum of 10 bits."
        );
        assert_eq!(
            parse(&["line-coding", "10a1"]).unwrap_err(),
            "Input must be binary (only 0s and 1s)."
        );
        assert_eq!(
            parse(&["line-coding", ""]).unwrap_err(),
            "Input must contain at least 1 bit."
        );
    }

    #[test]
    fn test_generated_message_is_seeded() {
        let a = parse(&["line-coding", "--seed", "42"]).unwrap();
        let b = parse(&["line-coding", "--seed", "42"]).unwrap();
        assert_eq!(a.source, MessageSource::Generated);
        assert_eq!(a.seed, 42);
        assert_eq!(a.bits, b.bits);
    }

    #[test]
    fn test_random_len() {
        let config =
            parse(&["line-coding", "--seed", "7", "--random-len", "10"]).unwrap();
        assert_eq!(config.bits.len(), 10);

        assert!(parse(&["line-coding", "--random-len", "0"]).is_err());
        assert!(parse(&["line-coding", "--random-len", "11"]).is_err());
    }

    #[test]
    fn test_output_flags() {
        let config = parse(&[
            "line-coding",
            "1",
            "--no-plot",
            "--no-metrics",
            "--print-config",
            "--half-width",
            "4",
        ])
        .unwrap();
        assert!(!config.plot);
        assert!(!config.print_metrics);
        assert!(config.print_config);
        assert_eq!(config.half_width, 4);

        assert!(parse(&["line-coding", "1", "--half-width", "1"]).is_err());

        let widest = MAX_HALF_WIDTH.to_string();
        assert_eq!(
            parse(&["line-coding", "1", "--half-width", &widest]).unwrap().half_width,
            MAX_HALF_WIDTH
        );
        let too_wide = (MAX_HALF_WIDTH + 1).to_string();
        assert!(parse(&["line-coding", "1", "--half-width", &too_wide]).is_err());
        let huge = (usize::MAX / 2).to_string();
        assert!(parse(&["line-coding", "1", "--half-width", &huge]).is_err());
    }

    #[test]
    fn test_random_len_needs_generated_message() {
        let err = parse(&["line-coding", "1011", "--random-len", "4"]).unwrap_err();
        assert!(err.contains("--random-len"), "{err}");
    }
}
