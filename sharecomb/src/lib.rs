#![warn(missing_docs, unused_imports)]

//! _This is a part of **sharecomb**._
//!
//! Reconstructs a shared secret from a threshold set of Shamir shares using exact
//! arbitrary-precision arithmetic throughout: share values arrive as numeral strings in any
//! base from 2 to 36, are decoded into `rug::Integer`s, and the secret is recovered as the
//! value at $x = 0$ of the unique degree-$(k-1)$ polynomial through the first $k$ shares.
//! No intermediate result ever passes through floating point.

/// Decoding numeral strings in bases 2 through 36 into exact integers.
pub mod radix;

/// Lagrange interpolation at zero over exact integer and rational arithmetic.
pub mod interpolate;

/// The reconstruction pipeline: decoding, share selection and interpolation.
pub mod reconstruct;

/// JSON case documents, file loading and the bundled sample fixtures.
pub mod document;

pub use crate::reconstruct::reconstruct;
