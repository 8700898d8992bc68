use rug::Integer;
use serde::{Deserialize, Serialize};

/// The threshold parameters of a reconstruction case. We denote a sharing using a tuple like
/// (k, n): there are n shares in total, of which any k determine the secret. Only `k` drives
/// the computation; `n` is carried along for reporting and is not enforced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdParams {
    /// Total number of shares issued.
    pub n: usize,
    /// Number of shares required (and used) to reconstruct the secret.
    pub k: usize,
}

/// A share as it arrives from a data source, before decoding: the y-coordinate is still a
/// numeral string in the record's own base.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EncodedShare {
    /// The x-coordinate of the share, a small positive identifier.
    pub x: i64,
    /// The base the value is encoded in, between 2 and 36.
    pub base: u32,
    /// The y-coordinate as a numeral string in `base`.
    pub value: String,
}

/// A full reconstruction case: the threshold parameters next to an explicit list of encoded
/// shares. The serialized form keeps the original document's `"keys"` name for the parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionCase {
    /// The (k, n) parameters of this case.
    #[serde(rename = "keys")]
    pub params: ThresholdParams,
    /// Every encoded share the source handed over, not just the k that will be used.
    pub shares: Vec<EncodedShare>,
}

/// A decoded point (x, y) on the secret polynomial. Within a selected set the x-coordinates
/// must be pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// The x-coordinate.
    pub x: i64,
    /// The decoded y-coordinate.
    pub y: Integer,
}
