use rayon::prelude::*;

use crate::core::actions::render_cells::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::render_cells::sample_cell::render_cell;
use crate::core::data::cell_render::CellRender;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;

/// Renders every cell of `viewport` with rows spread over rayon's pool.
///
/// The viewport, algorithm and config are shared read-only for the whole
/// pass. Output order matches [`render_cells`](super::render_cells::render_cells).
pub fn render_cells_parallel_rayon<Alg>(
    viewport: &Viewport,
    algorithm: &Alg,
    config: RenderConfig,
) -> Vec<CellRender>
where
    Alg: EscapeTimeAlgorithm + Sync + ?Sized,
{
    let grid_width = viewport.grid_width();

    (0..viewport.grid_height())
        .into_par_iter()
        .flat_map_iter(|row| {
            (0..grid_width).map(move |col| render_cell(viewport, algorithm, config, row, col))
        })
        .collect()
}
