//! Draw commands and frames

use heapless::Vec;

use crate::config::Color;
use crate::time::Label;
use crate::traits::DrawSurface;
use crate::weather::IconCategory;

/// Maximum draw commands in one frame
///
/// The interactive layout with weather needs six.
pub const MAX_DRAW_COMMANDS: usize = 8;

/// Rectangle in display pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal center
    pub const fn center_x(&self) -> i32 {
        self.x.saturating_add(self.width / 2)
    }

    /// Vertical center
    pub const fn center_y(&self) -> i32 {
        self.y.saturating_add(self.height / 2)
    }
}

/// How a text command is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub color: Color,
    /// Text height in pixels
    pub size_px: u16,
    pub anti_alias: bool,
}

/// How a bitmap command is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitmapStyle {
    pub anti_alias: bool,
}

/// One drawing operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawCommand {
    /// Solid rectangle
    FillRect { bounds: Bounds, color: Color },
    /// Text centred on `x`, baseline at `y`
    Text {
        text: Label,
        x: i32,
        y: i32,
        style: TextStyle,
    },
    /// Icon centred on `(x, y)`
    Bitmap {
        icon: IconCategory,
        x: i32,
        y: i32,
        style: BitmapStyle,
    },
}

impl DrawCommand {
    /// Text of a text command
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Draw this command on a surface
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        match self {
            DrawCommand::FillRect { bounds, color } => surface.fill_rect(*bounds, *color),
            DrawCommand::Text { text, x, y, style } => surface.draw_text(text, *x, *y, style),
            DrawCommand::Bitmap { icon, x, y, style } => {
                surface.draw_bitmap(*icon, *x, *y, style)
            }
        }
    }
}

/// Ordered draw commands for one redraw
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    commands: Vec<DrawCommand, MAX_DRAW_COMMANDS>,
}

impl Frame {
    /// Create an empty frame
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command
    ///
    /// Returns the command back if the frame is full.
    pub fn push(&mut self, command: DrawCommand) -> Result<(), DrawCommand> {
        self.commands.push(command)
    }

    /// Commands in drawing order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over all drawn text
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::text)
    }

    /// Iterate over all bitmap commands as `(icon, x, y)`
    pub fn bitmaps(&self) -> impl Iterator<Item = (IconCategory, i32, i32)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Bitmap { icon, x, y, .. } => Some((*icon, *x, *y)),
            _ => None,
        })
    }

    /// Color of the leading background fill
    pub fn background(&self) -> Option<Color> {
        match self.commands.first() {
            Some(DrawCommand::FillRect { color, .. }) => Some(*color),
            _ => None,
        }
    }

    /// Draw every command in order
    ///
    /// Stops at the first surface error.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        for command in &self.commands {
            command.draw(surface)?;
        }
        Ok(())
    }
}
