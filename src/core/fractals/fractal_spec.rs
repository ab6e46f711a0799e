use crate::core::actions::render_cells::ports::escape_time_algorithm::{
    EscapeResult, EscapeTimeAlgorithm,
};
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::multibrot::algorithm::MultibrotAlgorithm;
use std::fmt;

/// The fractal selected at startup. Immutable for the rest of the process.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalSpec {
    #[default]
    Mandelbrot,
    Multibrot(MultibrotAlgorithm),
}

impl FractalSpec {
    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::Multibrot(_) => FractalKind::Multibrot,
        }
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        match self {
            Self::Mandelbrot => 2.0,
            Self::Multibrot(algorithm) => algorithm.exponent(),
        }
    }
}

impl EscapeTimeAlgorithm for FractalSpec {
    #[inline]
    fn evaluate(&self, c: Complex) -> EscapeResult {
        match self {
            Self::Mandelbrot => MandelbrotAlgorithm.evaluate(c),
            Self::Multibrot(algorithm) => algorithm.evaluate(c),
        }
    }
}

impl fmt::Display for FractalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandelbrot => write!(f, "{}", self.kind().display_name()),
            Self::Multibrot(algorithm) => {
                write!(f, "{} (d = {})", self.kind().display_name(), algorithm.exponent())
            }
        }
    }
}
