use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::controllers::session::Command;
use crate::core::actions::navigate::navigator::PanDirection;

/// Rows reserved below the grid for the status line.
pub const STATUS_ROWS: u16 = 1;

/// Grid dimensions `(height, width)` for a terminal of `columns` x `rows`.
#[must_use]
pub fn grid_size(columns: u16, rows: u16) -> (u32, u32) {
    (
        u32::from(rows.saturating_sub(STATUS_ROWS)),
        u32::from(columns),
    )
}

/// Translates a terminal event into a session command, if it maps to one.
#[must_use]
pub fn command_from_event(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) => command_from_key(key),
        Event::Mouse(mouse) => command_from_mouse(mouse),
        Event::Resize(columns, rows) => {
            let (grid_height, grid_width) = grid_size(*columns, *rows);
            Some(Command::Resize {
                grid_height,
                grid_width,
            })
        }
        _ => None,
    }
}

fn command_from_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Command::Pan(PanDirection::Up)),
        KeyCode::Down => Some(Command::Pan(PanDirection::Down)),
        KeyCode::Left => Some(Command::Pan(PanDirection::Left)),
        KeyCode::Right => Some(Command::Pan(PanDirection::Right)),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::ZoomIn),
        KeyCode::Char('-') => Some(Command::ZoomOut),
        KeyCode::Char('h') => Some(Command::ToggleHideBackground),
        KeyCode::Char('b') => Some(Command::ToggleBrightPalette),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::CancelSelection),
        _ => None,
    }
}

fn command_from_mouse(mouse: &MouseEvent) -> Option<Command> {
    let row = u32::from(mouse.row);
    let col = u32::from(mouse.column);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Command::SelectPoint { row, col }),
        MouseEventKind::Down(MouseButton::Right) => Some(Command::SelectCorner { row, col }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys_map_to_commands() {
        let cases = [
            (KeyCode::Up, Command::Pan(PanDirection::Up)),
            (KeyCode::Down, Command::Pan(PanDirection::Down)),
            (KeyCode::Left, Command::Pan(PanDirection::Left)),
            (KeyCode::Right, Command::Pan(PanDirection::Right)),
            (KeyCode::Char('+'), Command::ZoomIn),
            (KeyCode::Char('-'), Command::ZoomOut),
            (KeyCode::Char('h'), Command::ToggleHideBackground),
            (KeyCode::Char('b'), Command::ToggleBrightPalette),
            (KeyCode::Char('r'), Command::Reset),
            (KeyCode::Char('q'), Command::Quit),
            (KeyCode::Esc, Command::CancelSelection),
        ];

        for (code, expected) in cases {
            assert_eq!(command_from_event(&key(code)), Some(expected), "{code:?}");
        }
    }

    #[test]
    fn unbound_keys_and_releases_are_ignored() {
        assert_eq!(command_from_event(&key(KeyCode::Char('x'))), None);

        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(command_from_event(&release), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert_eq!(command_from_event(&event), Some(Command::Quit));
    }

    #[test]
    fn clicks_select_cells() {
        assert_eq!(
            command_from_event(&click(MouseEventKind::Down(MouseButton::Left), 12, 4)),
            Some(Command::SelectPoint { row: 4, col: 12 })
        );
        assert_eq!(
            command_from_event(&click(MouseEventKind::Down(MouseButton::Right), 0, 7)),
            Some(Command::SelectCorner { row: 7, col: 0 })
        );
        assert_eq!(
            command_from_event(&click(MouseEventKind::Moved, 3, 3)),
            None
        );
    }

    #[test]
    fn resize_reserves_status_row() {
        assert_eq!(
            command_from_event(&Event::Resize(80, 24)),
            Some(Command::Resize {
                grid_height: 23,
                grid_width: 80
            })
        );
        assert_eq!(grid_size(10, 0), (0, 10));
    }
}
