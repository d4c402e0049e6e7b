pub mod curve;
pub mod entropy;
pub mod sample;
pub mod softmax;
pub mod stoch;

pub use curve::{Curve, CurveMode};
pub use entropy::*;
pub use sample::*;
pub use softmax::*;
pub use stoch::*;
