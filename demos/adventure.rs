// demos/adventure.rs
// Run with:
//   RUST_LOG=debug cargo run --example adventure --features genre-adventure

use grapple_odds::Candidate;
use grapple_odds::genres::{AdventureConfig, AdventureScene, MoveKind};

fn main() -> Result<(), grapple_odds::EngineError> {
    env_logger::init();

    let ledges = vec![
        Candidate::new(0, 2.0, 0.0, false, 0.2),
        Candidate::new(1, 4.0, 0.5, false, 0.4),
        Candidate::new(2, 4.5, 3.0, true, 0.45),
        Candidate::new(3, 6.0, 2.0, false, 0.6),
        Candidate::new(4, 8.0, 1.0, true, 0.8),
        Candidate::new(5, 9.5, 2.5, false, 0.95),
    ];
    let mut scene = AdventureScene::new(AdventureConfig::default(), ledges, (0.0, 0.0), 7)?;

    let script = [
        (MoveKind::Jump, true),
        (MoveKind::Climb, false),
        (MoveKind::Swing, true),
        (MoveKind::Jump, true),
        (MoveKind::Jump, false),
    ];
    for (kind, correct) in script {
        let report = scene.attempt(kind, correct)?;
        println!(
            "{:?} correct={} → ledge {} {:+}  player=({:.1}, {:.1}) score={}",
            kind,
            correct,
            report.outcome.id,
            report.outcome.total,
            scene.player().0,
            scene.player().1,
            scene.score(),
        );
    }

    Ok(())
}
