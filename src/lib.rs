pub mod cli;
mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::session::{Command, FractalSession, Frame, FrameCell, FramePresenterPort};
pub use controllers::startup::{ConfigError, StartupConfig};
pub use crate::core::actions::navigate::navigator::{Navigator, PanDirection};
pub use crate::core::actions::navigate::preset::ViewportPreset;
pub use crate::core::actions::render_cells::ports::escape_time_algorithm::{
    EscapeResult, EscapeTimeAlgorithm, MAX_ITERATIONS,
};
pub use crate::core::actions::render_cells::render_cells::render_cells;
pub use crate::core::actions::render_cells::render_cells_parallel_rayon::render_cells_parallel_rayon;
pub use crate::core::actions::render_cells::render_mode::RenderMode;
pub use crate::core::data::cell_render::{CellRender, ColourBucket};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::render_config::RenderConfig;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::fractal_spec::FractalSpec;
pub use input::terminal::commands::run_terminal::RunTerminalCommand;
pub use presenters::terminal::TerminalPresenter;
