//! Tile colors
//!
//! Grid cells hold bare indices; this maps them to names (used as button
//! labels) and display values.

use serde::{Deserialize, Serialize};

use crate::sim::Color;

/// The six stock colors, in index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::Red,
        PaletteColor::Orange,
        PaletteColor::Yellow,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Purple,
    ];

    pub fn from_index(index: Color) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(&self) -> Color {
        *self as Color
    }

    /// Accessible label
    pub fn name(&self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Orange => "orange",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Purple => "purple",
        }
    }

    /// CSS color value
    pub fn hex(&self) -> &'static str {
        match self {
            PaletteColor::Red => "#e74c3c",
            PaletteColor::Orange => "#f39c12",
            PaletteColor::Yellow => "#f1c40f",
            PaletteColor::Green => "#2ecc71",
            PaletteColor::Blue => "#3498db",
            PaletteColor::Purple => "#9b59b6",
        }
    }

    /// Single character for text output
    pub fn symbol(&self) -> char {
        match self {
            PaletteColor::Red => 'R',
            PaletteColor::Orange => 'O',
            PaletteColor::Yellow => 'Y',
            PaletteColor::Green => 'G',
            PaletteColor::Blue => 'B',
            PaletteColor::Purple => 'P',
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s || c.symbol().to_ascii_lowercase().to_string() == s)
    }
}
