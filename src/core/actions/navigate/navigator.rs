use crate::core::actions::navigate::errors::NavigatorError;
use crate::core::actions::navigate::limits::NavigatorLimits;
use crate::core::actions::navigate::preset::ViewportPreset;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// `(dy, dx)` cell deltas for a one-cell pan. Positive `dy` moves the view
    /// towards larger imaginary parts, positive `dx` towards smaller real parts.
    #[must_use]
    pub const fn deltas(self) -> (i32, i32) {
        match self {
            Self::Up => (1, 0),
            Self::Down => (-1, 0),
            Self::Left => (0, 1),
            Self::Right => (0, -1),
        }
    }
}

/// Owns the viewport and mutates it in response to navigation commands.
///
/// Every operation validates the candidate viewport before committing it, so a
/// rejected command leaves the current viewport untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    viewport: Viewport,
    preset: ViewportPreset,
    limits: NavigatorLimits,
}

impl Navigator {
    pub fn new(
        preset: ViewportPreset,
        grid_height: u32,
        grid_width: u32,
    ) -> Result<Self, NavigatorError> {
        let (top_left, bottom_right) = preset.corners();
        let viewport = Viewport::new(top_left, bottom_right, grid_height, grid_width)?;

        Ok(Self {
            viewport,
            preset,
            limits: NavigatorLimits::default(),
        })
    }

    #[must_use]
    pub fn with_limits(mut self, limits: NavigatorLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn preset(&self) -> ViewportPreset {
        self.preset
    }

    /// Slides the viewport by whole cells without changing its span.
    pub fn pan(&mut self, dy: i32, dx: i32) -> Result<(), NavigatorError> {
        let origin = pixel_to_complex_coords(&self.viewport, 0, 0);

        let mut offset_y = origin - pixel_to_complex_coords(&self.viewport, dy.unsigned_abs(), 0);
        if dy < 0 {
            offset_y = offset_y.scale(-1.0);
        }

        let mut offset_x = origin - pixel_to_complex_coords(&self.viewport, 0, dx.unsigned_abs());
        if dx < 0 {
            offset_x = offset_x.scale(-1.0);
        }

        let shift = offset_y + offset_x;
        let top_left = self.viewport.top_left() + shift;
        let bottom_right = self.viewport.bottom_right() + shift;

        self.viewport = self.viewport.with_corners(top_left, bottom_right)?;
        Ok(())
    }

    pub fn pan_towards(&mut self, direction: PanDirection) -> Result<(), NavigatorError> {
        let (dy, dx) = direction.deltas();
        self.pan(dy, dx)
    }

    /// Halves both axis spans around the current centre.
    pub fn zoom_in(&mut self) -> Result<(), NavigatorError> {
        let offset = self.span().scale(0.25);

        self.commit_within_limits(
            self.viewport.top_left() + offset,
            self.viewport.bottom_right() - offset,
        )
    }

    /// Doubles both axis spans around the current centre.
    pub fn zoom_out(&mut self) -> Result<(), NavigatorError> {
        let offset = self.span().scale(0.5);

        self.commit_within_limits(
            self.viewport.top_left() - offset,
            self.viewport.bottom_right() + offset,
        )
    }

    /// Moves the viewport so `point` is its centre, keeping the span.
    pub fn centre(&mut self, point: Complex) -> Result<(), NavigatorError> {
        let half = self.span().scale(0.5);

        self.viewport = self
            .viewport
            .with_corners(point - half, point + half)?;
        Ok(())
    }

    /// Fits the viewport to the rectangle spanned by two opposite corners,
    /// given in either order.
    pub fn zoom_to_region(&mut self, a: Complex, b: Complex) -> Result<(), NavigatorError> {
        let top_left = Complex::new(a.real.min(b.real), a.imag.max(b.imag));
        let bottom_right = Complex::new(a.real.max(b.real), a.imag.min(b.imag));

        self.commit_within_limits(top_left, bottom_right)
    }

    /// Restores the preset corners, discarding all pan and zoom history.
    pub fn reset(&mut self) {
        let (top_left, bottom_right) = self.preset.corners();

        // The preset corners were accepted by `new` and the grid is unchanged.
        if let Ok(viewport) = self.viewport.with_corners(top_left, bottom_right) {
            self.viewport = viewport;
        }
    }

    pub fn resize(&mut self, grid_height: u32, grid_width: u32) -> Result<(), NavigatorError> {
        self.viewport = self.viewport.with_grid(grid_height, grid_width)?;
        Ok(())
    }

    fn span(&self) -> Complex {
        Complex::new(self.viewport.re_span(), self.viewport.im_span())
    }

    fn commit_within_limits(
        &mut self,
        top_left: Complex,
        bottom_right: Complex,
    ) -> Result<(), NavigatorError> {
        let re_span = bottom_right.real - top_left.real;
        let im_span = bottom_right.imag - top_left.imag;

        if !self.limits.allows(re_span, im_span) {
            return Err(NavigatorError::SpanOutOfLimits { re_span, im_span });
        }

        self.viewport = self.viewport.with_corners(top_left, bottom_right)?;
        Ok(())
    }
}
