use crate::i18n::Language;
use qb_macros::Vector;

pub const DEFAULT_ROWS_PER_CHUNK: usize = 20;
pub const DEFAULT_SCROLL_THRESHOLD: f32 = 2.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Vector)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SplitOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Divider position in points, measured from the leading edge of the split
/// container, together with the range it may be dragged within.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitBounds {
    pub size: f32,
    pub min: f32,
    pub max: f32,
}

impl SplitBounds {
    pub fn for_orientation(orientation: SplitOrientation) -> Self {
        match orientation {
            SplitOrientation::Horizontal => Self {
                size: 300.0,
                min: 200.0,
                max: 400.0,
            },
            SplitOrientation::Vertical => Self {
                size: 500.0,
                min: 400.0,
                max: 600.0,
            },
        }
    }

    pub fn clamp(&self, candidate: f32) -> f32 {
        candidate.clamp(self.min, self.max)
    }
}

pub struct Preferences {
    pub theme: Theme,
    pub orientation: SplitOrientation,
    pub split: SplitBounds,
    pub rows_per_chunk: usize,
    pub scroll_threshold: f32,
    pub language: Language,
}

impl Default for Preferences {
    fn default() -> Self {
        let orientation = SplitOrientation::default();
        Self {
            theme: Theme::default(),
            orientation,
            split: SplitBounds::for_orientation(orientation),
            rows_per_chunk: DEFAULT_ROWS_PER_CHUNK,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            language: Language::default(),
        }
    }
}

impl Preferences {
    /// Flips the split axis and resets the divider to the defaults of the new
    /// orientation, discarding any dragged position.
    pub fn toggle_orientation(&mut self) {
        self.orientation = match self.orientation {
            SplitOrientation::Horizontal => SplitOrientation::Vertical,
            SplitOrientation::Vertical => SplitOrientation::Horizontal,
        };
        self.split = SplitBounds::for_orientation(self.orientation);
    }
}
