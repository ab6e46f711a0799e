use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum FractalSpecError {
    NonFiniteExponent { exponent: f64 },
    WrongParameterCount { fractal: &'static str, expected: usize, found: usize },
}

impl fmt::Display for FractalSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteExponent { exponent } => {
                write!(f, "exponent must be a finite number, got {}", exponent)
            }
            Self::WrongParameterCount {
                fractal,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{} takes {} parameter(s), got {}",
                    fractal, expected, found
                )
            }
        }
    }
}

impl Error for FractalSpecError {}
