use crate::core::data::complex::Complex;

/// Iteration cap shared by every escape-time evaluation.
pub const MAX_ITERATIONS: u32 = 100;

/// Normalised escape metric in `[0, 1]`: the iteration at which the orbit
/// escaped divided by [`MAX_ITERATIONS`], or exactly `1.0` when it never did.
pub type EscapeResult = f64;

pub trait EscapeTimeAlgorithm {
    fn evaluate(&self, c: Complex) -> EscapeResult;
}
