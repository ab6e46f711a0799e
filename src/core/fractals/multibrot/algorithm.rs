use crate::core::actions::render_cells::ports::escape_time_algorithm::{
    EscapeResult, EscapeTimeAlgorithm, MAX_ITERATIONS,
};
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FractalSpecError;
use std::ops::ControlFlow;

/// Escape-time iteration of `z -> z^d + c` for a real exponent `d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultibrotAlgorithm {
    exponent: f64,
}

impl EscapeTimeAlgorithm for MultibrotAlgorithm {
    fn evaluate(&self, c: Complex) -> EscapeResult {
        let escaped = (0..MAX_ITERATIONS).try_fold(c, |z, iteration| {
            let next = z.powf(self.exponent) + c;

            // Overflow in powf surfaces as NaN, which no longer bounds anything
            if !next.is_finite() || next.magnitude_squared() > 4.0 {
                ControlFlow::Break(iteration)
            } else {
                ControlFlow::Continue(next)
            }
        });

        match escaped {
            ControlFlow::Break(iteration) => {
                f64::from(iteration) / f64::from(MAX_ITERATIONS)
            }
            ControlFlow::Continue(_) => 1.0,
        }
    }
}

impl MultibrotAlgorithm {
    pub fn new(exponent: f64) -> Result<Self, FractalSpecError> {
        if !exponent.is_finite() {
            return Err(FractalSpecError::NonFiniteExponent { exponent });
        }

        Ok(Self { exponent })
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}
