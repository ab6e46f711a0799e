use std::fmt;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            real: self.real * factor,
            imag: self.imag * factor,
        }
    }

    /// Raises `self` to a real power through the polar form.
    ///
    /// The origin has no argument, so it is handled explicitly: a positive
    /// exponent gives zero, zero gives one and a negative exponent diverges.
    #[must_use]
    pub fn powf(self, exponent: f64) -> Self {
        let magnitude_squared = self.magnitude_squared();

        if magnitude_squared == 0.0 {
            return if exponent > 0.0 {
                Self::ZERO
            } else if exponent == 0.0 {
                Self::new(1.0, 0.0)
            } else {
                Self::new(f64::INFINITY, 0.0)
            };
        }

        let radius = magnitude_squared.sqrt().powf(exponent);
        let angle = self.imag.atan2(self.real) * exponent;

        Self {
            real: radius * angle.cos(),
            imag: radius * angle.sin(),
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} + {:.6}i", self.real, self.imag)
    }
}
