//! Border/indicator state of a field.

use crate::color::{Color, Palette};

/// Visual state signalled by a field's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Idle, or confirmed with nothing in the text.
    Neutral,
    /// A value was just confirmed.
    Success,
    /// The dropdown is open.
    Active,
}

impl Indicator {
    /// Indicator for the given field state.
    pub fn resolve(confirmed: bool, text_empty: bool, dropdown_open: bool) -> Self {
        if confirmed && text_empty {
            Indicator::Neutral
        } else if confirmed {
            Indicator::Success
        } else if dropdown_open {
            Indicator::Active
        } else {
            Indicator::Neutral
        }
    }

    /// Palette color for this indicator.
    pub fn color(self, palette: &Palette) -> Color {
        match self {
            Indicator::Neutral => palette.text,
            Indicator::Success => palette.success,
            Indicator::Active => palette.accent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order() {
        assert_eq!(Indicator::resolve(true, true, true), Indicator::Neutral);
        assert_eq!(Indicator::resolve(true, false, true), Indicator::Success);
        assert_eq!(Indicator::resolve(false, false, true), Indicator::Active);
        assert_eq!(Indicator::resolve(false, true, false), Indicator::Neutral);
    }

    #[test]
    fn test_colors_come_from_palette() {
        let palette = Palette::default();
        assert_eq!(Indicator::Success.color(&palette), palette.success);
        assert_eq!(Indicator::Active.color(&palette), palette.accent);
        assert_eq!(Indicator::Neutral.color(&palette), palette.text);
    }
}
