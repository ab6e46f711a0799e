/// Process-wide render toggles, changed only by explicit toggle commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub hide_background: bool,
    pub bright_palette: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hide_background: true,
            bright_palette: false,
        }
    }
}

impl RenderConfig {
    pub fn toggle_hide_background(&mut self) {
        self.hide_background = !self.hide_background;
    }

    pub fn toggle_bright_palette(&mut self) {
        self.bright_palette = !self.bright_palette;
    }
}
