pub mod navigate;
pub mod render_cells;
