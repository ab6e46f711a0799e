use crate::core::actions::render_cells::ports::escape_time_algorithm::{
    EscapeResult, EscapeTimeAlgorithm, MAX_ITERATIONS,
};
use crate::core::data::complex::Complex;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm;

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    fn evaluate(&self, c: Complex) -> EscapeResult {
        let mut real = c.real;
        let mut imag = c.imag;

        for iteration in 0..MAX_ITERATIONS {
            let next_real = real * real - imag * imag + c.real;
            imag = 2.0 * real * imag + c.imag;
            real = next_real;

            let magnitude_squared = real * real + imag * imag;
            if magnitude_squared.is_nan() || magnitude_squared > 4.0 {
                return f64::from(iteration) / f64::from(MAX_ITERATIONS);
            }
        }

        1.0
    }
}
