use crate::core::data::complex::Complex;

/// Starting rectangle restored by `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportPreset {
    /// -2+2i to 2-2i
    #[default]
    Classic,
    /// -5+5i to 5-5i
    Wide,
}

impl ViewportPreset {
    pub const ALL: &'static [Self] = &[Self::Classic, Self::Wide];

    #[must_use]
    pub const fn corners(self) -> (Complex, Complex) {
        match self {
            Self::Classic => (Complex::new(-2.0, 2.0), Complex::new(2.0, -2.0)),
            Self::Wide => (Complex::new(-5.0, 5.0), Complex::new(5.0, -5.0)),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Wide => "wide",
        }
    }
}
