// tests/anchor_spawn.rs
#![cfg(feature = "system-anchor_spawn")]

use grapple_odds::EngineError;
use grapple_odds::mechanics::seeded;
use grapple_odds::systems::anchor_spawn::{SpawnConfig, spawn_anchors};

#[test]
fn spawns_requested_count_with_sequential_ids() {
    let cfg = SpawnConfig { count: 12, ..SpawnConfig::default() };
    let anchors = spawn_anchors(&cfg, 100, &mut seeded(3)).unwrap();
    assert_eq!(anchors.len(), 12);
    for (k, a) in anchors.iter().enumerate() {
        assert_eq!(a.id, 100 + k as u32);
        assert!(a.x >= cfg.x_min && a.x < cfg.x_max);
        assert!(a.y >= cfg.y_min && a.y < cfg.y_max);
        assert!((a.structural_score - cfg.structural_score(a.x)).abs() < 1e-12);
        assert!((0.0..=1.0).contains(&a.structural_score));
    }
}

#[test]
fn always_contains_a_safe_anchor_past_goal() {
    // All hazards: the forced anchor is the only safe one.
    let cfg = SpawnConfig { hazard_chance: 1.0, goal_x: Some(8.0), ..SpawnConfig::default() };
    for seed in 0..200u64 {
        let anchors = spawn_anchors(&cfg, 0, &mut seeded(seed)).unwrap();
        let safe: Vec<_> = anchors.iter().filter(|a| !a.hazard).collect();
        assert_eq!(safe.len(), 1, "seed {seed}");
        assert!(safe[0].x >= 8.0, "seed {seed}: {:?}", safe[0]);
        assert_eq!(safe[0].id, anchors.last().unwrap().id);
    }
}

#[test]
fn no_goal_means_no_forcing() {
    let cfg = SpawnConfig { hazard_chance: 1.0, goal_x: None, ..SpawnConfig::default() };
    let anchors = spawn_anchors(&cfg, 0, &mut seeded(11)).unwrap();
    assert!(anchors.iter().all(|a| a.hazard));
}

#[test]
fn same_seed_same_anchors() {
    let cfg = SpawnConfig::default();
    let a = spawn_anchors(&cfg, 0, &mut seeded(77)).unwrap();
    let b = spawn_anchors(&cfg, 0, &mut seeded(77)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rejects_unusable_configs() {
    let bad = [
        SpawnConfig { count: 0, ..SpawnConfig::default() },
        SpawnConfig { x_min: 5.0, x_max: 5.0, goal_x: None, ..SpawnConfig::default() },
        SpawnConfig { y_min: 3.0, y_max: 1.0, ..SpawnConfig::default() },
        SpawnConfig { goal_x: Some(10.0), ..SpawnConfig::default() },
        SpawnConfig { x_min: f64::NAN, goal_x: None, ..SpawnConfig::default() },
        SpawnConfig { x_max: f64::INFINITY, goal_x: None, ..SpawnConfig::default() },
        SpawnConfig { y_min: f64::NEG_INFINITY, ..SpawnConfig::default() },
        SpawnConfig { y_max: f64::INFINITY, ..SpawnConfig::default() },
        SpawnConfig { goal_x: Some(f64::NAN), ..SpawnConfig::default() },
        SpawnConfig { hazard_chance: f64::NAN, ..SpawnConfig::default() },
        SpawnConfig { hazard_chance: -0.1, ..SpawnConfig::default() },
        SpawnConfig { hazard_chance: 1.5, ..SpawnConfig::default() },
    ];
    for cfg in bad {
        assert!(
            matches!(spawn_anchors(&cfg, 0, &mut seeded(0)), Err(EngineError::InvalidConfig(_))),
            "{cfg:?}"
        );
    }
}
