// demos/grapple.rs
// Run with:
//   RUST_LOG=debug cargo run --example grapple --features genre-grapple

use grapple_odds::genres::GrappleArena;
use grapple_odds::{EngineConfig, Preset};

fn main() -> Result<(), grapple_odds::EngineError> {
    env_logger::init();

    let cfg = EngineConfig::from_preset(Preset::Arena);
    let mut arena = GrappleArena::new(&cfg, 2024)?;

    // A scripted answer sheet; the line tilts a little each question.
    let answers = [true, true, false, true, false, true, true, true, false, true, true, true];
    for (k, &correct) in answers.iter().enumerate() {
        let line = (0.2 - 0.05 * k as f64, 6.0);
        let report = arena.fire(correct, Some(line))?;
        let odds: Vec<String> = report.probabilities.iter().map(|p| format!("{:.2}", p)).collect();
        println!(
            "q{:02} correct={:<5} odds=[{}] → anchor {} ({}) {:+} (bonus {}) score={}",
            k + 1,
            correct,
            odds.join(" "),
            report.outcome.id,
            if report.outcome.hazard { "hazard" } else { "safe" },
            report.outcome.total,
            report.outcome.confidence_bonus,
            arena.score(),
        );
        if arena.reached_goal() {
            println!("goal reached after {} rounds at x={:.2}", arena.rounds(), arena.player().0);
            break;
        }
    }

    Ok(())
}
