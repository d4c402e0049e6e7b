pub mod scoring;
pub mod weights;
#[cfg(feature="system-anchor_spawn")] pub mod anchor_spawn;
#[cfg(feature="system-fire_outcome")] pub mod fire_outcome;
