use std::time::Duration;

use crate::core::colour::palette::ColourPair;
use crate::core::data::cell_render::CellRender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCell {
    pub cell: CellRender,
    pub colour: ColourPair,
}

/// One finished render pass, ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub grid_height: u32,
    pub grid_width: u32,
    pub cells: Vec<FrameCell>,
    pub status_line: String,
    pub render_duration: Duration,
}
