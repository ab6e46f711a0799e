use crate::core::actions::render_cells::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::render_cells::sample_cell::render_cell;
use crate::core::data::cell_render::CellRender;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;

/// Renders every cell of `viewport` on the calling thread, in row-major order.
pub fn render_cells<Alg: EscapeTimeAlgorithm + ?Sized>(
    viewport: &Viewport,
    algorithm: &Alg,
    config: RenderConfig,
) -> Vec<CellRender> {
    (0..viewport.grid_height())
        .flat_map(|row| (0..viewport.grid_width()).map(move |col| (row, col)))
        .map(|(row, col)| render_cell(viewport, algorithm, config, row, col))
        .collect()
}
