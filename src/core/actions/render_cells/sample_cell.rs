use crate::core::actions::render_cells::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::cell_render::{
    CellRender, ColourBucket, GLYPH_BACKGROUND, GLYPH_INSIDE, GLYPH_OUTSIDE,
};
use crate::core::data::complex::Complex;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Sub-steps per cell along each axis. A cell is sampled on a
/// `(RESOLUTION + 1)²` grid that includes both edges.
pub const RESOLUTION: u32 = 5;

const SAMPLES_PER_CELL: f64 = ((RESOLUTION + 1) * (RESOLUTION + 1)) as f64;

/// Aggregate of one cell's supersampled escape results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSample {
    /// Mean escape result over all sub-points.
    pub distance: f64,
    /// Fraction of sub-points that never escaped.
    pub in_fraction: f64,
}

impl CellSample {
    /// Blend of mean escape depth and inside fraction, weighted 2:1.
    #[must_use]
    pub fn colour_metric(&self) -> f64 {
        (2.0 * self.distance + self.in_fraction) / 3.0
    }
}

/// Sub-point spacing for a viewport: `(re step, im step)`.
#[must_use]
pub fn sub_steps(viewport: &Viewport) -> (f64, f64) {
    let step_re = (viewport.re_span() / f64::from(viewport.grid_width())) / f64::from(RESOLUTION);
    let step_im = (viewport.im_span() / f64::from(viewport.grid_height())) / f64::from(RESOLUTION);

    (step_re, step_im)
}

pub fn sample_cell<Alg: EscapeTimeAlgorithm + ?Sized>(
    base: Complex,
    step_re: f64,
    step_im: f64,
    algorithm: &Alg,
) -> CellSample {
    let mut distance_sum = 0.0;
    let mut in_count: u32 = 0;

    for py in 0..=RESOLUTION {
        for px in 0..=RESOLUTION {
            let point = Complex {
                real: base.real + f64::from(px) * step_re,
                imag: base.imag + f64::from(py) * step_im,
            };
            let result = algorithm.evaluate(point);

            distance_sum += result;
            if result == 1.0 {
                in_count += 1;
            }
        }
    }

    CellSample {
        distance: distance_sum / SAMPLES_PER_CELL,
        in_fraction: f64::from(in_count) / SAMPLES_PER_CELL,
    }
}

/// Turns a cell sample into its bucket and glyph.
#[must_use]
pub fn classify(row: u32, col: u32, sample: CellSample, config: RenderConfig) -> CellRender {
    let bucket = ColourBucket::from_metric(sample.colour_metric());
    let glyph = if sample.in_fraction < 0.5 {
        GLYPH_OUTSIDE
    } else {
        GLYPH_INSIDE
    };

    if bucket == ColourBucket::None && config.hide_background {
        return CellRender {
            row,
            col,
            bucket: ColourBucket::Bg,
            glyph: GLYPH_BACKGROUND,
        };
    }

    CellRender {
        row,
        col,
        bucket,
        glyph,
    }
}

/// Samples and classifies a single cell of `viewport`.
pub fn render_cell<Alg: EscapeTimeAlgorithm + ?Sized>(
    viewport: &Viewport,
    algorithm: &Alg,
    config: RenderConfig,
    row: u32,
    col: u32,
) -> CellRender {
    let base = pixel_to_complex_coords(viewport, row, col);
    let (step_re, step_im) = sub_steps(viewport);

    classify(row, col, sample_cell(base, step_re, step_im, algorithm), config)
}
