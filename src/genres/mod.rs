// src/genres/mod.rs

// Game modes that drive the engine end to end.
// Each mode is feature-gated so downstream games enable only what they use.

#[cfg(feature = "system-fire_outcome")]
pub mod sdk;
#[cfg(feature = "system-fire_outcome")]
pub use sdk::*;

#[cfg(feature = "genre-grapple")]
pub mod grapple;
#[cfg(feature = "genre-grapple")]
pub use grapple::GrappleArena;

#[cfg(feature = "genre-adventure")]
pub mod adventure;
#[cfg(feature = "genre-adventure")]
pub use adventure::{AdventureConfig, AdventureScene, MoveKind, Trajectory};
