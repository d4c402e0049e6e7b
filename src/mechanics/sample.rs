/// Categorical sampling over a probability vector.
use crate::error::{EngineError, Result};
use crate::mechanics::stoch::UnitSource;

/// Allowed drift of `Σ p` away from 1.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Boundary check between softmax output and sampler/entropy input.
/// Catches raw scores passed where probabilities were expected.
pub fn validate_probabilities(probabilities: &[f64]) -> Result<()> {
    if probabilities.is_empty() {
        return Err(EngineError::EmptyCandidateSet);
    }
    if let Some((i, p)) = probabilities
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p < 0.0)
    {
        return Err(EngineError::InvalidProbabilityVector {
            reason: format!("entry {i} is {p}"),
        });
    }
    let sum: f64 = probabilities.iter().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(EngineError::InvalidProbabilityVector {
            reason: format!("entries sum to {sum}"),
        });
    }
    Ok(())
}

/// Draw one index: `r ~ U[0,1)`, return the first non-zero-probability index
/// whose running sum reaches `r`. If rounding leaves the walk short of `r`,
/// the last non-zero-probability index is returned.
pub fn sample_categorical<U: UnitSource + ?Sized>(probabilities: &[f64], rng: &mut U) -> Result<usize> {
    validate_probabilities(probabilities)?;
    let r = rng.next_unit();
    Ok(walk_cumulative(probabilities, r))
}

/// The cumulative walk on its own, for a caller-supplied `r`.
/// Expects an already validated vector.
pub fn walk_cumulative(probabilities: &[f64], r: f64) -> usize {
    let mut cum = 0.0;
    let mut last_live = 0;
    for (i, &p) in probabilities.iter().enumerate() {
        if p <= 0.0 {
            continue;
        }
        cum += p;
        last_live = i;
        if cum >= r {
            log::trace!("sampled index {i} (r={r:.6}, cum={cum:.6})");
            return i;
        }
    }
    log::warn!("cumulative walk fell through (r={r}, cum={cum}); using index {last_live}");
    last_live
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_picks_first_bucket_reaching_r() {
        let p = [0.5, 0.25, 0.25];
        assert_eq!(walk_cumulative(&p, 0.0), 0);
        assert_eq!(walk_cumulative(&p, 0.5), 0);
        assert_eq!(walk_cumulative(&p, 0.5000001), 1);
        assert_eq!(walk_cumulative(&p, 0.75), 1);
        assert_eq!(walk_cumulative(&p, 0.9), 2);
    }

    #[test]
    fn walk_skips_zero_buckets() {
        assert_eq!(walk_cumulative(&[0.0, 1.0], 0.0), 1);
        assert_eq!(walk_cumulative(&[0.0, 0.6, 0.0, 0.4, 0.0], 0.7), 3);
    }

    #[test]
    fn walk_falls_back_to_last_live_index() {
        // Sums to slightly under 1; r lands in the gap.
        let p = [0.3, 0.3, 0.399_999_9, 0.0];
        assert_eq!(walk_cumulative(&p, 0.999_999_99), 2);
    }

    #[test]
    fn rejects_raw_scores() {
        assert!(matches!(
            validate_probabilities(&[2.0, -1.0]),
            Err(EngineError::InvalidProbabilityVector { .. })
        ));
        assert!(matches!(
            validate_probabilities(&[0.5, 0.6]),
            Err(EngineError::InvalidProbabilityVector { .. })
        ));
        assert!(matches!(
            validate_probabilities(&[f64::NAN, 1.0]),
            Err(EngineError::InvalidProbabilityVector { .. })
        ));
        assert!(matches!(validate_probabilities(&[]), Err(EngineError::EmptyCandidateSet)));
    }
}
