//! Font selection
//!
//! The face asks for text by pixel height. Small sizes use the built-in
//! ISO-8859-1 fonts, larger ones ProFont. Both carry the degree sign.

use embedded_graphics::mono_font::iso_8859_1::{
    FONT_10X20, FONT_6X10, FONT_7X13, FONT_9X15, FONT_9X18,
};
use embedded_graphics::mono_font::MonoFont;
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

/// Pick the font whose height best fits `size_px`
pub fn font_for_height(size_px: u16) -> &'static MonoFont<'static> {
    match size_px {
        0..=10 => &FONT_6X10,
        11..=13 => &FONT_7X13,
        14..=15 => &FONT_9X15,
        16..=18 => &FONT_9X18,
        19..=22 => &FONT_10X20,
        23..=30 => &PROFONT_18_POINT,
        _ => &PROFONT_24_POINT,
    }
}
