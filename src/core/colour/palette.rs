use crate::core::data::cell_render::ColourBucket;

use TerminalColour::{Black, Blue, Cyan, Green, Magenta, Red, White, Yellow};

/// The eight basic terminal colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalColour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColourPair {
    pub foreground: TerminalColour,
    pub background: TerminalColour,
}

const fn pair(foreground: TerminalColour, background: TerminalColour) -> ColourPair {
    ColourPair {
        foreground,
        background,
    }
}

/// Indexed by [`ColourBucket::index`].
const DARK: [ColourPair; 7] = [
    pair(White, Black),
    pair(Cyan, Black),
    pair(Magenta, Black),
    pair(Blue, Black),
    pair(Yellow, Black),
    pair(Green, Black),
    pair(Black, Black),
];

const BRIGHT: [ColourPair; 7] = [
    pair(Black, White),
    pair(Magenta, White),
    pair(Red, White),
    pair(Yellow, White),
    pair(Blue, White),
    pair(Cyan, White),
    pair(Red, White),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKind {
    #[default]
    Dark,
    Bright,
}

impl PaletteKind {
    #[must_use]
    pub const fn from_bright(bright: bool) -> Self {
        if bright { Self::Bright } else { Self::Dark }
    }

    const fn table(self) -> &'static [ColourPair; 7] {
        match self {
            Self::Dark => &DARK,
            Self::Bright => &BRIGHT,
        }
    }
}

/// Pure lookup from colour bucket to terminal colour pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColourMapper;

impl ColourMapper {
    #[must_use]
    pub fn resolve(&self, bucket: ColourBucket, bright: bool) -> ColourPair {
        PaletteKind::from_bright(bright).table()[bucket.index()]
    }
}
