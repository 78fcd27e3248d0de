//! Errors which can occur while signing, or while decoding keys and signatures

use displaydoc::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An error which can occur when signing, or when decoding signer input
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Error {
    /// Ring has {0} members, at least 2 are required
    RingTooSmall(usize),

    /// The signer's public key is not a member of the ring
    KeyNotInRing,

    /// Malformed input: {0}
    MalformedInput(Malformed),
}

/// The ways a byte string can fail to decode
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Malformed {
    /// incorrect length, provided `{found}`, required `{expected}`
    LengthMismatch {
        /// Number of bytes supplied
        found: usize,
        /// Number of bytes the layout requires
        expected: usize,
    },

    /// not a canonical Ristretto point encoding
    InvalidCurvePoint,

    /// not a canonical scalar encoding
    NonCanonicalScalar,
}

impl Error {
    /// Shorthand for a length mismatch
    pub fn length_mismatch(found: usize, expected: usize) -> Self {
        Error::MalformedInput(Malformed::LengthMismatch { found, expected })
    }

    /// Whether the error stems from structurally invalid input rather than a signing precondition
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Error::MalformedInput(_))
    }
}

impl From<Malformed> for Error {
    fn from(src: Malformed) -> Self {
        Error::MalformedInput(src)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for Malformed {}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::RingTooSmall(1).to_string(),
            "Ring has 1 members, at least 2 are required"
        );
        assert_eq!(
            Error::length_mismatch(31, 32).to_string(),
            "Malformed input: incorrect length, provided `31`, required `32`"
        );
        assert_eq!(
            Error::from(Malformed::InvalidCurvePoint).to_string(),
            "Malformed input: not a canonical Ristretto point encoding"
        );
    }

    #[test]
    fn malformed_classification() {
        assert!(Error::from(Malformed::NonCanonicalScalar).is_malformed_input());
        assert!(!Error::KeyNotInRing.is_malformed_input());
        assert!(!Error::RingTooSmall(0).is_malformed_input());
    }
}
