#![warn(missing_docs, unused_imports)]

//! _This is a part of **sharecomb**. For more information, head to the
//! `sharecomb` crate._
//!
//! The share data model, reconstruction errors and the orchestration seams
//! shared by every sharecomb crate: encoded share records as they arrive from
//! a data source, decoded points on the secret polynomial, and the traits
//! through which cases flow in and reconstructed secrets flow out.

use std::fmt;

/// The data model: threshold parameters, encoded share records, decoded shares.
pub mod shares;

/// The seams between the core and its collaborators: case sources and secret sinks.
pub mod orchestration;

/// General error that arises when reconstructing a secret fails, for example because a share
/// carries a digit that is not valid in its base, or because the selected share set cannot
/// determine a unique polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconstructionError {
    /// The base of an encoded share lies outside the supported range [2, 36].
    InvalidBase {
        /// The offending base.
        base: u32,
    },
    /// An encoded share value was empty.
    EmptyValue,
    /// An encoded share value contains a character that is not a valid digit in its base.
    InvalidDigit {
        /// The offending character.
        character: char,
        /// The base the value claimed to be encoded in.
        base: u32,
    },
    /// Fewer shares are available than the threshold requires.
    InsufficientShares {
        /// The number of shares that were available.
        available: usize,
        /// The threshold k that was requested.
        required: usize,
    },
    /// Two selected shares carry the same x-coordinate, so no unique polynomial passes
    /// through them.
    DegenerateShareSet {
        /// The duplicated x-coordinate.
        x: i64,
    },
}

impl fmt::Display for ReconstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconstructionError::InvalidBase { base } => {
                write!(f, "base {} is outside the supported range [2, 36]", base)
            }
            ReconstructionError::EmptyValue => write!(f, "encoded share value is empty"),
            ReconstructionError::InvalidDigit { character, base } => {
                write!(f, "character {:?} is not a valid digit in base {}", character, base)
            }
            ReconstructionError::InsufficientShares { available, required } => write!(
                f,
                "only {} shares available but the threshold requires {}",
                available, required
            ),
            ReconstructionError::DegenerateShareSet { x } => {
                write!(f, "multiple selected shares carry x = {}", x)
            }
        }
    }
}

impl std::error::Error for ReconstructionError {}
