// tests/fire_outcome.rs
#![cfg(feature = "system-fire_outcome")]

use grapple_odds::systems::fire_outcome::{DeltaTable, base_delta, resolve};
use grapple_odds::{Candidate, EngineError};

fn pair() -> [Candidate; 2] {
    [Candidate::new(10, 1.0, 1.0, false, 0.2), Candidate::new(11, 2.0, 1.0, true, 0.4)]
}

#[test]
fn settles_landing_with_delta_and_bonus() {
    let table = DeltaTable::default();
    let out = resolve(&pair(), &[0.0, 1.0], 1, false, &table).unwrap();
    assert_eq!(out.index, 1);
    assert_eq!(out.id, 11);
    assert!(out.hazard);
    assert_eq!(out.base_delta, table.wrong_hazard);
    assert_eq!(out.confidence_bonus, 60);
    assert_eq!(out.total, table.wrong_hazard + 60);
}

#[test]
fn delta_table_covers_all_four_cases() {
    let t = DeltaTable { correct_safe: 1, correct_hazard: 2, wrong_safe: 3, wrong_hazard: 4 };
    assert_eq!(base_delta(&t, false, true), 1);
    assert_eq!(base_delta(&t, true, true), 2);
    assert_eq!(base_delta(&t, false, false), 3);
    assert_eq!(base_delta(&t, true, false), 4);
}

#[test]
fn index_past_the_end_is_rejected() {
    let one = [Candidate::new(0, 0.0, 0.0, false, 0.5)];
    assert!(matches!(
        resolve(&one, &[1.0], 3, true, &DeltaTable::default()),
        Err(EngineError::IndexOutOfRange { index: 3, len: 1 })
    ));
}

#[test]
fn length_mismatch_is_an_invalid_vector() {
    let one = [Candidate::new(0, 0.0, 0.0, false, 0.5)];
    match resolve(&one, &[0.5, 0.5], 0, true, &DeltaTable::default()) {
        Err(EngineError::InvalidProbabilityVector { reason }) => {
            assert!(reason.contains("2 probabilities for 1 candidates"), "{reason}");
        }
        other => panic!("expected InvalidProbabilityVector, got {other:?}"),
    }
}

#[test]
fn empty_candidate_set_is_rejected() {
    assert!(matches!(
        resolve(&[], &[], 0, true, &DeltaTable::default()),
        Err(EngineError::EmptyCandidateSet)
    ));
}

#[test]
fn raw_scores_in_place_of_probabilities_are_rejected() {
    assert!(matches!(
        resolve(&pair(), &[2.0, -1.0], 0, true, &DeltaTable::default()),
        Err(EngineError::InvalidProbabilityVector { .. })
    ));
}
