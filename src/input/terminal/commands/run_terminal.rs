use std::error::Error;
use std::io::{self, Stdout};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};

use crate::controllers::session::{FractalSession, FramePresenterPort};
use crate::controllers::startup::StartupConfig;
use crate::core::actions::navigate::navigator::Navigator;
use crate::input::terminal::events::{command_from_event, grid_size};
use crate::presenters::terminal::TerminalPresenter;

/// Puts the terminal into raw, full-screen mode and restores it on drop,
/// including when the loop exits through an error.
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide) {
            if let Err(rollback) = terminal::disable_raw_mode() {
                warn!("failed to leave raw mode after setup error: {}", rollback);
            }
            return Err(err);
        }

        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.stdout, Show, DisableMouseCapture, LeaveAlternateScreen) {
            warn!("failed to restore terminal screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            warn!("failed to leave raw mode: {}", err);
        }
    }
}

pub struct RunTerminalCommand {
    startup: StartupConfig,
}

impl RunTerminalCommand {
    pub fn new(startup: StartupConfig) -> Self {
        Self { startup }
    }

    /// Runs the blocking render / wait / apply loop until a quit command.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let (columns, rows) = terminal::size()?;
        let (grid_height, grid_width) = grid_size(columns, rows);

        let navigator = Navigator::new(self.startup.preset, grid_height.max(1), grid_width.max(1))?;
        let mut session = FractalSession::new(self.startup.spec, navigator)
            .with_render_mode(self.startup.render_mode);

        info!(
            "starting {} on a {}x{} grid ({} preset, {:?} rendering)",
            self.startup.spec,
            grid_height,
            grid_width,
            self.startup.preset.name(),
            self.startup.render_mode
        );

        let _guard = TerminalGuard::enter()?;
        let mut presenter = TerminalPresenter::new(io::stdout());

        loop {
            presenter.present(&session.render())?;

            let command = loop {
                if let Some(command) = command_from_event(&event::read()?) {
                    break command;
                }
            };

            if session.apply(command).is_break() {
                info!("quit requested");
                return Ok(());
            }
        }
    }
}
