//! Configuration type definitions
//!
//! Defaults reproduce the stock face resources. A host can override them
//! per device; with the `serde` feature they can be deserialized from any
//! serde format the host already uses.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interactive redraw period in milliseconds
pub const INTERACTIVE_UPDATE_RATE_MS: u64 = 1000;

/// Default vertical distance from the vertical center to the weather row (px)
pub const DEFAULT_WEATHER_MARGIN_PX: i32 = 40;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Create a color from its components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }
}

/// Colors used by the interactive layout
///
/// Ambient mode always uses a black background regardless of this palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    /// Interactive background fill
    pub background: Color,
    /// Time text
    pub time_text: Color,
    /// Date text
    pub date_text: Color,
    /// Min/max temperature text
    pub temp_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_hex(0x03A9F4),
            time_text: Color::WHITE,
            date_text: Color::from_hex(0xB3E5FC),
            temp_text: Color::WHITE,
        }
    }
}

/// Text sizes for one display shape (px)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sizing {
    /// Time text height, also used as the time/date spacing
    pub time_px: u16,
    /// Date text height
    pub date_px: u16,
    /// Temperature text height
    pub temp_px: u16,
}

impl Sizing {
    /// Stock sizing for square displays
    pub const SQUARE: Sizing = Sizing {
        time_px: 40,
        date_px: 20,
        temp_px: 24,
    };

    /// Stock sizing for round displays
    pub const ROUND: Sizing = Sizing {
        time_px: 44,
        date_px: 22,
        temp_px: 26,
    };
}

impl Default for Sizing {
    fn default() -> Self {
        Self::SQUARE
    }
}

/// Placement of the weather row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    /// Offset of the weather row below the vertical center (px)
    pub weather_margin_px: i32,
    /// Temperature columns sit at `center ± width / temp_column_divisor`
    pub temp_column_divisor: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            weather_margin_px: DEFAULT_WEATHER_MARGIN_PX,
            temp_column_divisor: 3,
        }
    }
}

/// Complete face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceConfig {
    /// Interactive colors
    pub palette: Palette,
    /// Text sizes on square displays
    pub square: Sizing,
    /// Text sizes on round displays
    pub round: Sizing,
    /// Weather row placement
    pub layout: Layout,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            square: Sizing::SQUARE,
            round: Sizing::ROUND,
            layout: Layout::default(),
        }
    }
}

impl FaceConfig {
    /// Pick the sizing for a display shape
    pub fn sizing_for(&self, round: bool) -> Sizing {
        if round {
            self.round
        } else {
            self.square
        }
    }
}
