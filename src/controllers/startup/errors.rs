use crate::core::fractals::errors::FractalSpecError;
use std::{error::Error, fmt};

/// Exit status for an unknown fractal name.
pub const EXIT_UNKNOWN_FRACTAL: u8 = 1;
/// Exit status for missing, malformed or surplus fractal parameters.
pub const EXIT_BAD_ARGUMENTS: u8 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnknownFractal { name: String },
    MissingParameter { fractal: &'static str, expected: usize, found: usize },
    MalformedParameter { token: String },
    UnexpectedParameter { token: String },
    Fractal(FractalSpecError),
}

impl ConfigError {
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownFractal { .. } => EXIT_UNKNOWN_FRACTAL,
            Self::MissingParameter { .. }
            | Self::MalformedParameter { .. }
            | Self::UnexpectedParameter { .. }
            | Self::Fractal(_) => EXIT_BAD_ARGUMENTS,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFractal { name } => {
                write!(f, "unknown fractal '{}'", name)
            }
            Self::MissingParameter {
                fractal,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{} needs {} parameter(s) but {} were given",
                    fractal, expected, found
                )
            }
            Self::MalformedParameter { token } => {
                write!(f, "'{}' is not a number", token)
            }
            Self::UnexpectedParameter { token } => {
                write!(f, "unexpected argument '{}'", token)
            }
            Self::Fractal(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fractal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FractalSpecError> for ConfigError {
    fn from(err: FractalSpecError) -> Self {
        Self::Fractal(err)
    }
}
