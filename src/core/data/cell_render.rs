/// Discrete colour class of a cell, derived from its colour metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColourBucket {
    None,
    Few,
    Some,
    Many,
    Lots,
    All,
    /// Background cell with `hide_background` set.
    Bg,
}

impl ColourBucket {
    pub const ALL: &'static [Self] = &[
        Self::None,
        Self::Few,
        Self::Some,
        Self::Many,
        Self::Lots,
        Self::All,
        Self::Bg,
    ];

    /// Buckets a colour metric; thresholds are inclusive upper bounds.
    #[must_use]
    pub fn from_metric(metric: f64) -> Self {
        if metric <= 0.1 {
            Self::None
        } else if metric <= 0.2 {
            Self::Few
        } else if metric <= 0.4 {
            Self::Some
        } else if metric <= 0.6 {
            Self::Many
        } else if metric <= 0.8 {
            Self::Lots
        } else {
            Self::All
        }
    }

    /// Palette slot of the bucket.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

pub const GLYPH_OUTSIDE: char = '.';
pub const GLYPH_INSIDE: char = '#';
pub const GLYPH_BACKGROUND: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRender {
    pub row: u32,
    pub col: u32,
    pub bucket: ColourBucket,
    pub glyph: char,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_upper_bounds() {
        assert_eq!(ColourBucket::from_metric(0.0), ColourBucket::None);
        assert_eq!(ColourBucket::from_metric(0.1), ColourBucket::None);
        assert_eq!(ColourBucket::from_metric(0.15), ColourBucket::Few);
        assert_eq!(ColourBucket::from_metric(0.2), ColourBucket::Few);
        assert_eq!(ColourBucket::from_metric(0.4), ColourBucket::Some);
        assert_eq!(ColourBucket::from_metric(0.6), ColourBucket::Many);
        assert_eq!(ColourBucket::from_metric(0.8), ColourBucket::Lots);
        assert_eq!(ColourBucket::from_metric(0.81), ColourBucket::All);
        assert_eq!(ColourBucket::from_metric(1.0), ColourBucket::All);
    }

    #[test]
    fn bucket_is_monotonic_in_metric() {
        let mut previous = ColourBucket::from_metric(0.0);

        for step in 1..=1000 {
            let bucket = ColourBucket::from_metric(f64::from(step) / 1000.0);
            assert!(bucket >= previous, "bucket fell at metric {}", step);
            previous = bucket;
        }
    }

    #[test]
    fn indices_cover_seven_palette_slots() {
        let indices: Vec<usize> = ColourBucket::ALL.iter().map(|b| b.index()).collect();

        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6]);
    }
}
