pub mod cell_render;
pub mod complex;
pub mod render_config;
pub mod viewport;
