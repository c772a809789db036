//! The closed set of supported line codes.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A line-encoding scheme.
///
/// The set is fixed; every `match` over it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingScheme {
    /// Non-return-to-zero level: the level is the bit value.
    NrzL,
    /// Non-return-to-zero inverted: a `1` toggles the level.
    NrzI,
    /// Alternate mark inversion: `1` pulses alternate +1/-1, `0` is zero.
    BipolarAmi,
    /// AMI with the roles of `0` and `1` swapped.
    Pseudoternary,
    /// `1` is high-then-low, `0` is low-then-high.
    Manchester,
    /// Mid-bit transition always; the bit selects the boundary behavior.
    DifferentialManchester,
}

impl EncodingScheme {
    /// All schemes, in the order the selector presents them.
    pub const ALL: [EncodingScheme; 6] = [
        EncodingScheme::NrzL,
        EncodingScheme::NrzI,
        EncodingScheme::BipolarAmi,
        EncodingScheme::Pseudoternary,
        EncodingScheme::Manchester,
        EncodingScheme::DifferentialManchester,
    ];

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            EncodingScheme::NrzL => "NRZ-L",
            EncodingScheme::NrzI => "NRZ-I",
            EncodingScheme::BipolarAmi => "Bipolar AMI",
            EncodingScheme::Pseudoternary => "Pseudoternary",
            EncodingScheme::Manchester => "Manchester",
            EncodingScheme::DifferentialManchester => "Differential Manchester",
        }
    }

    /// Whether the scheme uses the negative level (three-level codes).
    pub fn is_ternary(self) -> bool {
        matches!(
            self,
            EncodingScheme::BipolarAmi | EncodingScheme::Pseudoternary
        )
    }

    /// Whether the scheme holds one level for the whole bit interval.
    ///
    /// Full-width schemes still emit two sub-levels per bit, duplicated.
    pub fn is_full_width(self) -> bool {
        matches!(
            self,
            EncodingScheme::NrzL
                | EncodingScheme::NrzI
                | EncodingScheme::BipolarAmi
                | EncodingScheme::Pseudoternary
        )
    }

    /// Whether every bit interval is guaranteed a mid-bit transition.
    pub fn is_self_clocking(self) -> bool {
        matches!(
            self,
            EncodingScheme::Manchester | EncodingScheme::DifferentialManchester
        )
    }

    /// Look up a scheme by name.
    ///
    /// Matching ignores ASCII case and treats space, `-` and `_` alike, so
    /// `"Bipolar AMI"`, `"bipolar-ami"` and `"BIPOLAR_AMI"` are the same.
    ///
    /// # Errors
    /// Returns `Error::UnknownScheme` if no scheme matches.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = normalize(name);
        Self::ALL
            .into_iter()
            .find(|scheme| normalize(scheme.name()) == wanted)
            .ok_or_else(|| Error::UnknownScheme {
                name: name.to_string(),
            })
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

impl FromStr for EncodingScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for scheme in EncodingScheme::ALL {
            assert_eq!(EncodingScheme::from_name(scheme.name()), Ok(scheme));
            assert_eq!(scheme.to_string(), scheme.name());
        }
    }

    #[test]
    fn test_name_aliases() {
        assert_eq!("nrz-l".parse::<EncodingScheme>(), Ok(EncodingScheme::NrzL));
        assert_eq!("NRZ_I".parse::<EncodingScheme>(), Ok(EncodingScheme::NrzI));
        assert_eq!("bipolar-ami".parse::<EncodingScheme>(), Ok(EncodingScheme::BipolarAmi));
        assert_eq!(
            "differential_manchester".parse::<EncodingScheme>(),
            Ok(EncodingScheme::DifferentialManchester)
        );
    }

    #[test]
    fn test_unknown_scheme() {
        assert_eq!(
            "MLT-3".parse::<EncodingScheme>(),
            Err(Error::UnknownScheme {
                name: "MLT-3".to_string()
            })
        );
        assert!("".parse::<EncodingScheme>().is_err());
        assert!("NRZ".parse::<EncodingScheme>().is_err());
    }

    #[test]
    fn test_scheme_classes() {
        let ternary: Vec<_> = EncodingScheme::ALL
            .into_iter()
            .filter(|s| s.is_ternary())
            .collect();
        assert_eq!(
            ternary,
            vec![EncodingScheme::BipolarAmi, EncodingScheme::Pseudoternary]
        );

        for scheme in EncodingScheme::ALL {
            // Mid-bit transitions and full-width levels are mutually exclusive
            assert_ne!(scheme.is_full_width(), scheme.is_self_clocking());
        }
    }
}
