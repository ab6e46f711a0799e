use crate::core::actions::navigate::navigator::PanDirection;

/// A discrete runtime command fed to the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
    ToggleHideBackground,
    ToggleBrightPalette,
    /// Centre the view on the top-left corner of a cell.
    SelectPoint { row: u32, col: u32 },
    /// Mark one corner of a region; the second mark zooms to the region.
    SelectCorner { row: u32, col: u32 },
    CancelSelection,
    Reset,
    Resize { grid_height: u32, grid_width: u32 },
    Quit,
}
