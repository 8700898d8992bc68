use crate::interpolate::interpolate_at_zero;
use crate::radix;
use rug::Integer;
use sharecomb_traits::shares::{EncodedShare, ReconstructionCase, Share};
use sharecomb_traits::ReconstructionError;

/// Decodes every encoded record into a point on the secret polynomial. All records are
/// decoded, not just the k that will be selected, so a malformed share is caught even when
/// it would not have contributed to the result.
pub fn decode_shares(records: &[EncodedShare]) -> Result<Vec<Share>, ReconstructionError> {
    records
        .iter()
        .map(|record| {
            Ok(Share {
                x: record.x,
                y: radix::decode(&record.value, record.base)?,
            })
        })
        .collect()
}

/// Selects the shares the interpolation will consume: ascending by x-coordinate, truncated
/// to the first `threshold`. Fails with [`ReconstructionError::InsufficientShares`] when
/// fewer than `threshold` shares are available, or when the threshold is zero.
pub fn select_shares(
    mut shares: Vec<Share>,
    threshold: usize,
) -> Result<Vec<Share>, ReconstructionError> {
    if threshold == 0 || shares.len() < threshold {
        return Err(ReconstructionError::InsufficientShares {
            available: shares.len(),
            required: threshold,
        });
    }

    shares.sort_by_key(|share| share.x);
    shares.truncate(threshold);

    Ok(shares)
}

/// Reconstructs the secret of a full case: decode every share, select the first k by
/// ascending x-coordinate, and interpolate the polynomial through them at $x = 0$. The
/// remaining n − k shares never influence the result.
pub fn reconstruct(case: &ReconstructionCase) -> Result<Integer, ReconstructionError> {
    let shares = decode_shares(&case.shares)?;
    let selected = select_shares(shares, case.params.k)?;

    interpolate_at_zero(&selected)
}
