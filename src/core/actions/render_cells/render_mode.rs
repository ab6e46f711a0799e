use crate::core::actions::render_cells::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::render_cells::render_cells::render_cells;
use crate::core::actions::render_cells::render_cells_parallel_rayon::render_cells_parallel_rayon;
use crate::core::data::cell_render::CellRender;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;

/// Whether a render pass runs on the calling thread or on rayon's pool.
/// Both produce identical, row-major output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    Serial,
    #[default]
    Parallel,
}

impl RenderMode {
    pub fn render<Alg>(self, viewport: &Viewport, algorithm: &Alg, config: RenderConfig) -> Vec<CellRender>
    where
        Alg: EscapeTimeAlgorithm + Sync + ?Sized,
    {
        match self {
            Self::Serial => render_cells(viewport, algorithm, config),
            Self::Parallel => render_cells_parallel_rayon(viewport, algorithm, config),
        }
    }
}
