pub mod ports;
pub mod render_cells;
pub mod render_cells_parallel_rayon;
pub mod render_mode;
pub mod sample_cell;
