use rug::{Integer, Rational};
use sharecomb_traits::shares::Share;
use sharecomb_traits::ReconstructionError;

/// Evaluates at $x = 0$ the unique degree-$(k-1)$ polynomial through the given $k$ shares,
/// which for a Shamir sharing is the secret. Uses the Lagrange form
/// $\sum_i y_i \prod_{j \neq i} \frac{-x_j}{x_i - x_j}$ with every intermediate held as an
/// exact integer or rational; the sum is truncated to an integer only once, after full
/// accumulation, so no floating point or per-term rounding can disturb the result.
///
/// Two shares with the same x-coordinate make the polynomial non-unique and fail with
/// [`ReconstructionError::DegenerateShareSet`] before any division takes place. An empty
/// share set fails with [`ReconstructionError::InsufficientShares`].
pub fn interpolate_at_zero(shares: &[Share]) -> Result<Integer, ReconstructionError> {
    let mut sum = Rational::new();

    for (numerator, denominator, share) in basis_terms(shares)? {
        sum += Rational::from((Integer::from(&share.y * &numerator), denominator));
    }

    Ok(sum.trunc().into_numer_denom().0)
}

/// Evaluates the secret like [`interpolate_at_zero`], but sums
/// $\lfloor y_i \prod_{j \neq i} (-x_j) \mathbin{/} \prod_{j \neq i} (x_i - x_j) \rfloor$
/// with a truncating integer division applied to every term on its own, the way the original
/// reconstruction script did.
///
/// A term's division need not be exact even when the full sum is an integer, and truncating
/// it in isolation then silently shifts the result: the shares (1,0), (2,1), (4,1) evaluate
/// to −1 exactly but to −2 here. Only use this variant to reproduce the original's output
/// bit for bit; [`interpolate_at_zero`] is correct for every input.
pub fn interpolate_at_zero_truncating(shares: &[Share]) -> Result<Integer, ReconstructionError> {
    let mut sum = Integer::new();

    for (numerator, denominator, share) in basis_terms(shares)? {
        sum += Integer::from(&share.y * &numerator) / denominator;
    }

    Ok(sum)
}

/// The per-share Lagrange basis numerator $\prod_{j \neq i} (-x_j)$ and denominator
/// $\prod_{j \neq i} (x_i - x_j)$, both exact. Rejects empty and degenerate share sets, so
/// every returned denominator is nonzero.
fn basis_terms(
    shares: &[Share],
) -> Result<Vec<(Integer, Integer, &Share)>, ReconstructionError> {
    if shares.is_empty() {
        return Err(ReconstructionError::InsufficientShares {
            available: 0,
            required: 1,
        });
    }

    let mut terms = Vec::with_capacity(shares.len());

    for (i, share) in shares.iter().enumerate() {
        let mut numerator = Integer::from(1);
        let mut denominator = Integer::from(1);

        for (j, other) in shares.iter().enumerate() {
            if i == j {
                continue;
            }

            if other.x == share.x {
                return Err(ReconstructionError::DegenerateShareSet { x: share.x });
            }

            numerator *= -other.x;
            denominator *= share.x - other.x;
        }

        terms.push((numerator, denominator, share));
    }

    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::{interpolate_at_zero, interpolate_at_zero_truncating};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rug::ops::Pow;
    use rug::Integer;
    use sharecomb_traits::shares::Share;
    use sharecomb_traits::ReconstructionError;

    fn share(x: i64, y: i64) -> Share {
        Share { x, y: Integer::from(y) }
    }

    /// Evaluates a polynomial given by its coefficients (constant term first) at `x`.
    fn evaluate(coefficients: &[i64], x: i64) -> Integer {
        let mut result = Integer::new();
        for coefficient in coefficients.iter().rev() {
            result = result * x + *coefficient;
        }
        result
    }

    #[test]
    fn recovers_the_constant_term_of_a_quadratic() {
        // (1,4), (2,7), (3,12) lie on y = x^2 + 3.
        let shares = vec![share(1, 4), share(2, 7), share(3, 12)];
        assert_eq!(interpolate_at_zero(&shares).unwrap(), 3);

        // y = x^2 + x + 2 through (1,4), (2,8), (3,14).
        let shares = vec![share(1, 4), share(2, 8), share(3, 14)];
        assert_eq!(interpolate_at_zero(&shares).unwrap(), 2);
    }

    #[test]
    fn result_is_independent_of_share_order() {
        let mut shares = vec![share(3, 12), share(1, 4), share(2, 7)];
        let expected = interpolate_at_zero(&shares).unwrap();

        shares.reverse();
        assert_eq!(interpolate_at_zero(&shares).unwrap(), expected);

        shares.swap(0, 1);
        assert_eq!(interpolate_at_zero(&shares).unwrap(), expected);
    }

    #[test]
    fn duplicate_x_coordinates_are_degenerate() {
        let shares = vec![share(2, 5), share(2, 9)];
        assert_eq!(
            interpolate_at_zero(&shares),
            Err(ReconstructionError::DegenerateShareSet { x: 2 })
        );
        assert_eq!(
            interpolate_at_zero_truncating(&shares),
            Err(ReconstructionError::DegenerateShareSet { x: 2 })
        );
    }

    #[test]
    fn empty_share_sets_are_rejected() {
        assert_eq!(
            interpolate_at_zero(&[]),
            Err(ReconstructionError::InsufficientShares { available: 0, required: 1 })
        );
    }

    #[test]
    fn truncating_mode_diverges_on_inexact_terms() {
        let shares = vec![share(1, 0), share(2, 1), share(4, 1)];

        // Exactly, the sum is -5/3; truncating each term on its own loses a unit.
        assert_eq!(interpolate_at_zero(&shares).unwrap(), -1);
        assert_eq!(interpolate_at_zero_truncating(&shares).unwrap(), -2);
    }

    #[test]
    fn recovers_random_integer_polynomials() {
        let mut rng = StdRng::seed_from_u64(0x5ec2e7);

        for _ in 0..50 {
            let k = rng.gen_range(1..=6);
            let coefficients: Vec<i64> =
                (0..k).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect();

            let mut xs: Vec<i64> = (1..=20).collect();
            xs.shuffle(&mut rng);

            let shares: Vec<Share> = xs[..k]
                .iter()
                .map(|&x| Share { x, y: evaluate(&coefficients, x) })
                .collect();

            assert_eq!(interpolate_at_zero(&shares).unwrap(), coefficients[0]);
        }
    }

    #[test]
    fn handles_secrets_with_hundreds_of_digits() {
        // A linear polynomial with a 120-digit constant term: y = c + 7x.
        let constant = Integer::from(10).pow(119u32) + 987_654_321;
        let shares: Vec<Share> = [1i64, 2]
            .iter()
            .map(|&x| Share { x, y: Integer::from(&constant + 7 * x) })
            .collect();

        assert_eq!(interpolate_at_zero(&shares).unwrap(), constant);
    }
}
