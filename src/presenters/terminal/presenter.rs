use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};

use crate::controllers::session::{Frame, FramePresenterPort};
use crate::core::colour::palette::{ColourPair, TerminalColour};

/// Draws frames as coloured glyphs, with the status line on the row below
/// the grid.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn set_colour(&mut self, colour: ColourPair) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(terminal_colour(colour.foreground)),
            SetBackgroundColor(terminal_colour(colour.background))
        )
    }
}

impl<W: Write> FramePresenterPort for TerminalPresenter<W> {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate, Clear(ClearType::All))?;

        let mut current: Option<ColourPair> = None;

        for (i, painted) in frame.cells.iter().enumerate() {
            if painted.cell.col == 0 || i == 0 {
                queue!(self.out, MoveTo(to_u16(painted.cell.col), to_u16(painted.cell.row)))?;
            }

            // Only emit colour changes between runs of equal colour
            if current != Some(painted.colour) {
                self.set_colour(painted.colour)?;
                current = Some(painted.colour);
            }

            queue!(self.out, Print(painted.cell.glyph))?;
        }

        let status: String = frame
            .status_line
            .chars()
            .take(frame.grid_width as usize)
            .collect();

        queue!(
            self.out,
            ResetColor,
            MoveTo(0, to_u16(frame.grid_height)),
            Clear(ClearType::CurrentLine),
            Print(status),
            EndSynchronizedUpdate
        )?;

        self.out.flush()
    }
}

fn to_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn terminal_colour(colour: TerminalColour) -> Color {
    match colour {
        TerminalColour::Black => Color::Black,
        TerminalColour::Red => Color::DarkRed,
        TerminalColour::Green => Color::DarkGreen,
        TerminalColour::Yellow => Color::DarkYellow,
        TerminalColour::Blue => Color::DarkBlue,
        TerminalColour::Magenta => Color::DarkMagenta,
        TerminalColour::Cyan => Color::DarkCyan,
        TerminalColour::White => Color::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::session::FrameCell;
    use crate::core::data::cell_render::{CellRender, ColourBucket};
    use std::time::Duration;

    fn frame() -> Frame {
        let colour = ColourPair {
            foreground: TerminalColour::Green,
            background: TerminalColour::Black,
        };
        let cells = (0..2)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .map(|(row, col)| FrameCell {
                cell: CellRender {
                    row,
                    col,
                    bucket: ColourBucket::All,
                    glyph: if col == 1 { '.' } else { '#' },
                },
                colour,
            })
            .collect();

        Frame {
            grid_height: 2,
            grid_width: 3,
            cells,
            status_line: "From (a) to (b)".to_string(),
            render_duration: Duration::ZERO,
        }
    }

    #[test]
    fn present_writes_glyphs_rows_and_status() {
        let mut presenter = TerminalPresenter::new(Vec::new());

        presenter.present(&frame()).unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(output.matches("#.#").count(), 2);
        // Status line is cut to the grid width
        assert!(output.contains("Fro"));
        assert!(!output.contains("From"));
    }

    #[test]
    fn colour_is_set_once_for_a_uniform_frame() {
        let mut presenter = TerminalPresenter::new(Vec::new());

        presenter.present(&frame()).unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        let mut expected = Vec::new();
        queue!(expected, SetForegroundColor(Color::DarkGreen)).unwrap();
        let set_green = String::from_utf8(expected).unwrap();

        assert_eq!(output.matches(&set_green).count(), 1);
    }

    #[test]
    fn every_terminal_colour_maps_to_a_distinct_colour() {
        let all = [
            TerminalColour::Black,
            TerminalColour::Red,
            TerminalColour::Green,
            TerminalColour::Yellow,
            TerminalColour::Blue,
            TerminalColour::Magenta,
            TerminalColour::Cyan,
            TerminalColour::White,
        ];
        let mapped: Vec<Color> = all.iter().map(|&c| terminal_colour(c)).collect();

        for (i, colour) in mapped.iter().enumerate() {
            assert!(!mapped[i + 1..].contains(colour));
        }
    }
}
