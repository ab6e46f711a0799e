use std::ops::ControlFlow;
use std::time::Instant;

use log::{debug, warn};

use crate::controllers::session::command::Command;
use crate::controllers::session::data::frame::{Frame, FrameCell};
use crate::core::actions::navigate::errors::NavigatorError;
use crate::core::actions::navigate::navigator::Navigator;
use crate::core::actions::render_cells::render_mode::RenderMode;
use crate::core::colour::palette::ColourMapper;
use crate::core::data::complex::Complex;
use crate::core::data::render_config::RenderConfig;
use crate::core::fractals::fractal_spec::FractalSpec;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Owns all mutable state of an interactive run: the navigator (and through
/// it the viewport), the render toggles and a pending region corner.
#[derive(Debug, Clone)]
pub struct FractalSession {
    spec: FractalSpec,
    navigator: Navigator,
    config: RenderConfig,
    render_mode: RenderMode,
    colour_mapper: ColourMapper,
    pending_corner: Option<Complex>,
}

impl FractalSession {
    pub fn new(spec: FractalSpec, navigator: Navigator) -> Self {
        Self {
            spec,
            navigator,
            config: RenderConfig::default(),
            render_mode: RenderMode::default(),
            colour_mapper: ColourMapper,
            pending_corner: None,
        }
    }

    #[must_use]
    pub fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn config(&self) -> RenderConfig {
        self.config
    }

    #[must_use]
    pub fn spec(&self) -> FractalSpec {
        self.spec
    }

    #[must_use]
    pub fn pending_corner(&self) -> Option<Complex> {
        self.pending_corner
    }

    /// Applies one command. Navigation commands that would leave the viewport
    /// degenerate are logged and dropped.
    pub fn apply(&mut self, command: Command) -> ControlFlow<()> {
        debug!("command: {:?}", command);

        let result = match command {
            Command::Quit => return ControlFlow::Break(()),
            Command::Pan(direction) => self.navigator.pan_towards(direction),
            Command::ZoomIn => self.navigator.zoom_in(),
            Command::ZoomOut => self.navigator.zoom_out(),
            Command::ToggleHideBackground => {
                self.config.toggle_hide_background();
                Ok(())
            }
            Command::ToggleBrightPalette => {
                self.config.toggle_bright_palette();
                Ok(())
            }
            Command::SelectPoint { row, col } => match self.cell_point(row, col) {
                Some(point) => self.navigator.centre(point),
                None => Ok(()),
            },
            Command::SelectCorner { row, col } => match self.cell_point(row, col) {
                Some(point) => self.select_corner(point),
                None => Ok(()),
            },
            Command::CancelSelection => {
                self.pending_corner = None;
                Ok(())
            }
            Command::Reset => {
                self.navigator.reset();
                Ok(())
            }
            Command::Resize {
                grid_height,
                grid_width,
            } => self.navigator.resize(grid_height, grid_width),
        };

        if let Err(err) = result {
            warn!("ignoring {:?}: {}", command, err);
        }

        ControlFlow::Continue(())
    }

    /// Runs a full render pass over the current viewport.
    #[must_use]
    pub fn render(&self) -> Frame {
        let viewport = self.navigator.viewport();
        let start = Instant::now();
        let cells = self.render_mode.render(viewport, &self.spec, self.config);
        let render_duration = start.elapsed();

        debug!(
            "rendered {}x{} cells in {:?}",
            viewport.grid_height(),
            viewport.grid_width(),
            render_duration
        );

        let bright = self.config.bright_palette;
        let cells = cells
            .into_iter()
            .map(|cell| FrameCell {
                cell,
                colour: self.colour_mapper.resolve(cell.bucket, bright),
            })
            .collect();

        Frame {
            grid_height: viewport.grid_height(),
            grid_width: viewport.grid_width(),
            cells,
            status_line: self.status_line(),
            render_duration,
        }
    }

    #[must_use]
    pub fn status_line(&self) -> String {
        let viewport = self.navigator.viewport();
        let mut status = format!(
            "From ({}) to ({})",
            viewport.top_left(),
            viewport.bottom_right()
        );

        if self.config.hide_background {
            status.push_str(" [h]");
        }
        if self.config.bright_palette {
            status.push_str(" [b]");
        }
        if self.pending_corner.is_some() {
            status.push_str(" [select]");
        }

        status
    }

    fn cell_point(&self, row: u32, col: u32) -> Option<Complex> {
        let viewport = self.navigator.viewport();

        if row >= viewport.grid_height() || col >= viewport.grid_width() {
            debug!("selection ({}, {}) is outside the grid", row, col);
            return None;
        }

        Some(pixel_to_complex_coords(viewport, row, col))
    }

    fn select_corner(&mut self, point: Complex) -> Result<(), NavigatorError> {
        match self.pending_corner.take() {
            None => {
                self.pending_corner = Some(point);
                Ok(())
            }
            Some(first) => self.navigator.zoom_to_region(first, point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::navigate::navigator::PanDirection;
    use crate::core::actions::navigate::preset::ViewportPreset;
    use crate::core::colour::palette::TerminalColour;
    use crate::core::data::cell_render::ColourBucket;

    fn session() -> FractalSession {
        let navigator = Navigator::new(ViewportPreset::Classic, 10, 10).unwrap();
        FractalSession::new(FractalSpec::Mandelbrot, navigator).with_render_mode(RenderMode::Serial)
    }

    #[test]
    fn quit_breaks_and_everything_else_continues() {
        let mut session = session();

        assert_eq!(session.apply(Command::ZoomIn), ControlFlow::Continue(()));
        assert_eq!(session.apply(Command::Quit), ControlFlow::Break(()));
    }

    #[test]
    fn render_produces_one_cell_per_grid_position() {
        let frame = session().render();

        assert_eq!(frame.grid_height, 10);
        assert_eq!(frame.grid_width, 10);
        assert_eq!(frame.cells.len(), 100);
    }

    #[test]
    fn colours_follow_bright_toggle() {
        let mut session = session();
        let dark = session.render();

        session.apply(Command::ToggleBrightPalette);
        let bright = session.render();

        assert_eq!(dark.cells[0].cell, bright.cells[0].cell);
        assert_eq!(dark.cells[0].colour.background, TerminalColour::Black);
        assert_eq!(bright.cells[0].colour.background, TerminalColour::White);
    }

    #[test]
    fn hide_toggle_reveals_background_cells() {
        let mut session = session();
        assert_eq!(session.render().cells[0].cell.bucket, ColourBucket::Bg);

        session.apply(Command::ToggleHideBackground);

        assert_eq!(session.render().cells[0].cell.bucket, ColourBucket::None);
    }

    #[test]
    fn status_line_shows_corners_and_toggles() {
        let mut session = session();

        assert_eq!(
            session.status_line(),
            "From (-2.000000 + 2.000000i) to (2.000000 + -2.000000i) [h]"
        );

        session.apply(Command::ToggleHideBackground);
        session.apply(Command::ToggleBrightPalette);
        session.apply(Command::ZoomIn);

        assert_eq!(
            session.status_line(),
            "From (-1.000000 + 1.000000i) to (1.000000 + -1.000000i) [b]"
        );
    }

    #[test]
    fn select_point_centres_on_cell() {
        let mut session = session();

        session.apply(Command::SelectPoint { row: 2, col: 7 });

        // Cell (2, 7) starts at 0.8 + 1.2i
        let centre = session.navigator().viewport().centre();
        assert!((centre.real - 0.8).abs() < 1e-12);
        assert!((centre.imag - 1.2).abs() < 1e-12);
    }

    #[test]
    fn selection_outside_grid_is_ignored() {
        let mut session = session();
        let before = *session.navigator().viewport();

        session.apply(Command::SelectPoint { row: 10, col: 3 });
        session.apply(Command::SelectCorner { row: 0, col: 99 });

        assert_eq!(*session.navigator().viewport(), before);
        assert_eq!(session.pending_corner(), None);
    }

    #[test]
    fn two_corner_selection_zooms_to_region() {
        let mut session = session();

        session.apply(Command::SelectCorner { row: 5, col: 5 });
        assert_eq!(session.pending_corner(), Some(Complex::ZERO));
        assert!(session.status_line().ends_with("[select]"));

        session.apply(Command::SelectCorner { row: 0, col: 0 });

        let viewport = session.navigator().viewport();
        assert_eq!(viewport.top_left(), Complex::new(-2.0, 2.0));
        assert_eq!(viewport.bottom_right(), Complex::ZERO);
        assert_eq!(session.pending_corner(), None);
    }

    #[test]
    fn cancel_selection_drops_pending_corner() {
        let mut session = session();

        session.apply(Command::SelectCorner { row: 1, col: 1 });
        session.apply(Command::CancelSelection);

        assert_eq!(session.pending_corner(), None);
    }

    #[test]
    fn rejected_navigation_leaves_viewport_untouched() {
        let mut session = session();

        session.apply(Command::SelectCorner { row: 3, col: 3 });
        let before = *session.navigator().viewport();
        session.apply(Command::SelectCorner { row: 3, col: 3 });

        assert_eq!(*session.navigator().viewport(), before);
    }

    #[test]
    fn reset_after_navigation_restores_defaults() {
        let mut session = session();

        session.apply(Command::Pan(PanDirection::Left));
        session.apply(Command::ZoomIn);
        session.apply(Command::ZoomIn);
        session.apply(Command::Reset);

        assert_eq!(
            session.navigator().viewport().top_left(),
            Complex::new(-2.0, 2.0)
        );
        assert_eq!(
            session.navigator().viewport().bottom_right(),
            Complex::new(2.0, -2.0)
        );
    }

    #[test]
    fn resize_changes_cell_count() {
        let mut session = session();

        session.apply(Command::Resize {
            grid_height: 4,
            grid_width: 6,
        });

        assert_eq!(session.render().cells.len(), 24);

        session.apply(Command::Resize {
            grid_height: 0,
            grid_width: 6,
        });
        assert_eq!(session.navigator().viewport().grid_height(), 4);
    }
}
