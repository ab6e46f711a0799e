use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSpan { re_span: f64, im_span: f64 },
    NonFiniteCorner { top_left: Complex, bottom_right: Complex },
    EmptyGrid { grid_height: u32, grid_width: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpan { re_span, im_span } => {
                write!(
                    f,
                    "viewport must have a positive real span and a negative imaginary span: {}, {}",
                    re_span, im_span
                )
            }
            Self::NonFiniteCorner {
                top_left,
                bottom_right,
            } => {
                write!(
                    f,
                    "viewport corners must be finite: ({}) to ({})",
                    top_left, bottom_right
                )
            }
            Self::EmptyGrid {
                grid_height,
                grid_width,
            } => {
                write!(
                    f,
                    "grid size must be positive: {}x{}",
                    grid_height, grid_width
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane mapped onto a `grid_height` by
/// `grid_width` cell grid. The top-left corner has the larger imaginary part.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    top_left: Complex,
    bottom_right: Complex,
    grid_height: u32,
    grid_width: u32,
}

impl Viewport {
    pub fn new(
        top_left: Complex,
        bottom_right: Complex,
        grid_height: u32,
        grid_width: u32,
    ) -> Result<Self, ViewportError> {
        if grid_height == 0 || grid_width == 0 {
            return Err(ViewportError::EmptyGrid {
                grid_height,
                grid_width,
            });
        }

        Self::check_corners(top_left, bottom_right)?;

        Ok(Self {
            top_left,
            bottom_right,
            grid_height,
            grid_width,
        })
    }

    /// Returns a copy with new corners, keeping the grid size.
    pub fn with_corners(
        &self,
        top_left: Complex,
        bottom_right: Complex,
    ) -> Result<Self, ViewportError> {
        Self::new(top_left, bottom_right, self.grid_height, self.grid_width)
    }

    /// Returns a copy with a new grid size, keeping the corners.
    pub fn with_grid(&self, grid_height: u32, grid_width: u32) -> Result<Self, ViewportError> {
        Self::new(self.top_left, self.bottom_right, grid_height, grid_width)
    }

    fn check_corners(top_left: Complex, bottom_right: Complex) -> Result<(), ViewportError> {
        if !top_left.is_finite() || !bottom_right.is_finite() {
            return Err(ViewportError::NonFiniteCorner {
                top_left,
                bottom_right,
            });
        }

        let re_span = bottom_right.real - top_left.real;
        let im_span = bottom_right.imag - top_left.imag;

        if re_span <= 0.0 || im_span >= 0.0 {
            return Err(ViewportError::InvalidSpan { re_span, im_span });
        }

        Ok(())
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    #[must_use]
    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    /// Width of the rectangle along the real axis. Always positive.
    #[must_use]
    pub fn re_span(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    /// `im(bottom_right) - im(top_left)`. Always negative.
    #[must_use]
    pub fn im_span(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex::new(
            self.top_left.real + self.re_span() / 2.0,
            self.top_left.imag + self.im_span() / 2.0,
        )
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.grid_height as usize * self.grid_width as usize
    }
}
