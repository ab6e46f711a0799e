use crate::core::fractals::errors::FractalSpecError;
use crate::core::fractals::fractal_spec::FractalSpec;
use crate::core::fractals::multibrot::algorithm::MultibrotAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Multibrot,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Multibrot];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Multibrot => "multibrot",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Multibrot => "Multibrot",
        }
    }

    /// Number of numeric parameters the fractal takes at startup.
    #[must_use]
    pub const fn parameter_count(self) -> usize {
        match self {
            Self::Mandelbrot => 0,
            Self::Multibrot => 1,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    pub fn build(self, params: &[f64]) -> Result<FractalSpec, FractalSpecError> {
        if params.len() != self.parameter_count() {
            return Err(FractalSpecError::WrongParameterCount {
                fractal: self.name(),
                expected: self.parameter_count(),
                found: params.len(),
            });
        }

        match self {
            Self::Mandelbrot => Ok(FractalSpec::Mandelbrot),
            Self::Multibrot => Ok(FractalSpec::Multibrot(MultibrotAlgorithm::new(params[0])?)),
        }
    }
}
