/// Curve mechanics: the player-adjustable line or function that candidates
/// are judged against.
///
/// A curve is used in exactly one role per call:
/// - `Line` and `Function { mode: Under }` answer "is this point under?"
/// - `Function { mode: Proximity }` contributes `-|y - f(x)|` as a fit term
///   and treats every point as under for the correctness table.
use std::fmt;

/// How a function curve participates in scoring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveMode {
    /// `y <= f(x) + tolerance`.
    Under { tolerance: f64 },
    /// Closeness to `f(x)`.
    Proximity,
}

#[derive(Clone, Copy)]
pub enum Curve<'f> {
    Line { m: f64, b: f64 },
    Function {
        f: &'f dyn Fn(f64) -> f64,
        mode: CurveMode,
    },
}

impl fmt::Debug for Curve<'_> {
    fn fmt(&self, fm: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Curve::Line { m, b } => fm.debug_struct("Line").field("m", m).field("b", b).finish(),
            Curve::Function { mode, .. } => fm
                .debug_struct("Function")
                .field("f", &"<fn>")
                .field("mode", mode)
                .finish(),
        }
    }
}

impl<'f> Curve<'f> {
    #[inline]
    pub fn line(m: f64, b: f64) -> Self {
        Curve::Line { m, b }
    }

    #[inline]
    pub fn under(f: &'f dyn Fn(f64) -> f64, tolerance: f64) -> Self {
        Curve::Function { f, mode: CurveMode::Under { tolerance } }
    }

    #[inline]
    pub fn proximity(f: &'f dyn Fn(f64) -> f64) -> Self {
        Curve::Function { f, mode: CurveMode::Proximity }
    }

    /// Under-curve predicate.
    #[inline]
    pub fn is_under(&self, x: f64, y: f64) -> bool {
        match *self {
            Curve::Line { m, b } => y <= m * x + b,
            Curve::Function { f, mode: CurveMode::Under { tolerance } } => y <= f(x) + tolerance,
            Curve::Function { mode: CurveMode::Proximity, .. } => true,
        }
    }

    /// Fit term `-|y - f(x)|`; zero unless in proximity mode.
    #[inline]
    pub fn fit(&self, x: f64, y: f64) -> f64 {
        match *self {
            Curve::Function { f, mode: CurveMode::Proximity } => -(y - f(x)).abs(),
            _ => 0.0,
        }
    }
}

/// Absent curve means "no constraint": everything is under, no fit term.
#[inline]
pub fn is_under(curve: Option<&Curve<'_>>, x: f64, y: f64) -> bool {
    curve.is_none_or(|c| c.is_under(x, y))
}

#[inline]
pub fn fit(curve: Option<&Curve<'_>>, x: f64, y: f64) -> f64 {
    curve.map_or(0.0, |c| c.fit(x, y))
}
