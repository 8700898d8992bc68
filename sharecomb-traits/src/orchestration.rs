use crate::shares::ReconstructionCase;
use std::fmt::Debug;

/// A source of reconstruction cases. The core never reads storage itself; an implementation
/// of this trait hands it fully structured records, whatever the underlying representation
/// (JSON documents on disk, an in-memory fixture set, etc.).
pub trait CaseSource {
    /// The error type of the underlying representation.
    type Error: Debug;

    /// Produce every case this source holds.
    fn cases(&mut self) -> Result<Vec<ReconstructionCase>, Self::Error>;
}

/// A sink accepting reconstructed secrets. The secret is handed over rendered as a decimal
/// string, so sinks never need arbitrary-precision arithmetic of their own.
pub trait SecretSink {
    /// Publish the `secret` reconstructed for the case identified by `label`.
    fn publish(&mut self, label: &str, secret: &str);
}
