// tests/properties.rs
use grapple_odds::mechanics::{seeded, validate_probabilities};
use grapple_odds::{calculate_confidence_bonus, calculate_entropy, sample_categorical, softmax};
use proptest::prelude::*;

fn scores() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-50.0f64..50.0, 1..40)
}

proptest! {
    #[test]
    fn softmax_is_a_distribution(s in scores()) {
        let p = softmax(&s).unwrap();
        prop_assert_eq!(p.len(), s.len());
        prop_assert!(p.iter().all(|v| v.is_finite() && *v >= 0.0));
        prop_assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        prop_assert!(validate_probabilities(&p).is_ok());
    }

    #[test]
    fn softmax_preserves_order(s in scores()) {
        let p = softmax(&s).unwrap();
        for i in 0..s.len() {
            for j in 0..s.len() {
                // Gaps below ~1e-9 can round to equal probabilities.
                if s[i] > s[j] + 1e-6 {
                    prop_assert!(p[i] > p[j], "s[{}]={} s[{}]={} p={:?}", i, s[i], j, s[j], p);
                }
            }
        }
    }

    #[test]
    fn softmax_ignores_constant_shift(s in scores(), c in -500.0f64..500.0) {
        let shifted: Vec<f64> = s.iter().map(|v| v + c).collect();
        let p = softmax(&s).unwrap();
        let q = softmax(&shifted).unwrap();
        for (a, b) in p.iter().zip(&q) {
            prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
        }
    }

    #[test]
    fn sampler_stays_in_range(s in scores(), seed in any::<u64>()) {
        let p = softmax(&s).unwrap();
        let mut rng = seeded(seed);
        for _ in 0..32 {
            let i = sample_categorical(&p, &mut rng).unwrap();
            prop_assert!(i < p.len());
        }
    }

    #[test]
    fn entropy_is_bounded(s in scores()) {
        let p = softmax(&s).unwrap();
        let h = calculate_entropy(&p).unwrap();
        let max = (p.len() as f64).log2();
        prop_assert!(h >= 0.0);
        prop_assert!(h <= max + 1e-9, "h={} max={}", h, max);
    }

    #[test]
    fn bonus_is_bounded(s in scores()) {
        let p = softmax(&s).unwrap();
        let bonus = calculate_confidence_bonus(&p).unwrap();
        prop_assert!(bonus <= 60);
        if p.len() == 1 {
            prop_assert_eq!(bonus, 60);
        }
    }
}

#[test]
fn uniform_entropy_is_log2_n() {
    for n in 1..=32usize {
        let p = vec![1.0 / n as f64; n];
        let h = calculate_entropy(&p).unwrap();
        assert!((h - (n as f64).log2()).abs() < 1e-12, "n={n}: {h}");
    }
}

#[test]
fn one_hot_entropy_is_zero() {
    for n in 1..=16usize {
        for hot in 0..n {
            let mut p = vec![0.0; n];
            p[hot] = 1.0;
            assert_eq!(calculate_entropy(&p).unwrap(), 0.0);
            assert_eq!(calculate_confidence_bonus(&p).unwrap(), 60);
        }
    }
}
