use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Maps the top-left corner of cell `(row, col)` onto the complex plane.
///
/// `(0, 0)` maps to `viewport.top_left()` exactly. Indices past the grid are
/// extrapolated along the same axes, which is how one-cell steps are measured.
#[must_use]
pub fn pixel_to_complex_coords(viewport: &Viewport, row: u32, col: u32) -> Complex {
    let re_offset = viewport.re_span() * (f64::from(col) / f64::from(viewport.grid_width()));
    let im_offset = viewport.im_span() * (f64::from(row) / f64::from(viewport.grid_height()));

    let top_left = viewport.top_left();

    Complex {
        real: top_left.real + re_offset,
        imag: top_left.imag + im_offset,
    }
}
