//! Error handling for the polynomial engine

use core::fmt;

/// The error type for polynomial-ring operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operands belong to rings of different degree N
    DimensionMismatch {
        /// Operation that detected the mismatch
        context: &'static str,
        /// Degree of the left operand
        left: u16,
        /// Degree of the right operand
        right: u16,
    },

    /// The injected random source could not produce the requested bytes
    RandomGeneration {
        /// Operation that was drawing randomness
        context: &'static str,
    },

    /// The private polynomial has no inverse modulo the working modulus.
    ///
    /// An expected outcome during key generation; callers resample and retry.
    NotInvertible,

    /// No catalog entry matches a decoded private key
    UnknownParameterSet {
        /// Ring degree of the key
        n: u16,
        /// Primary sparsity count of the key
        df: u16,
    },

    /// Byte input is shorter (or longer) than the encoding requires
    Length {
        /// Codec that rejected the input
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Malformed encoding (bad flag byte, inconsistent counts, stray bits)
    Encoding {
        /// Codec that rejected the input
        context: &'static str,
        /// What was wrong with the bytes
        details: &'static str,
    },
}

/// Result type for polynomial-ring operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch {
                context,
                left,
                right,
            } => {
                write!(f, "{}: ring degrees differ ({} vs {})", context, left, right)
            }
            Error::RandomGeneration { context } => {
                write!(f, "random source failed in {}", context)
            }
            Error::NotInvertible => {
                write!(f, "polynomial is not invertible modulo the working modulus")
            }
            Error::UnknownParameterSet { n, df } => {
                write!(f, "no parameter set matches N={}, df={}", n, df)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Parameter { name, reason } => {
                write!(f, "invalid parameter '{}': {}", name, reason)
            }
            Error::Encoding { context, details } => {
                write!(f, "malformed encoding in {}: {}", context, details)
            }
        }
    }
}

impl std::error::Error for Error {}
