//! Face layout
//!
//! Interactive layout, top to bottom: time, date, then the weather row with
//! the low temperature on the left, the icon in the middle and the high
//! temperature on the right. Ambient layout shows only time and date on
//! black, shifted down by one time-text height.

use super::frame::{BitmapStyle, Bounds, DrawCommand, Frame, TextStyle};
use crate::config::{Color, FaceConfig, Layout, Palette};
use crate::state::RenderState;
use crate::time::{format_temperature, format_time, AbbreviatedDate, DateFormatter, Label};

/// Builds frames from render state
#[derive(Debug, Clone)]
pub struct FrameComposer<F = AbbreviatedDate> {
    palette: Palette,
    layout: Layout,
    date_format: F,
}

impl FrameComposer<AbbreviatedDate> {
    /// Create a composer with the default English date format
    pub fn new(config: &FaceConfig) -> Self {
        Self::with_date_format(config, AbbreviatedDate)
    }
}

impl<F: DateFormatter> FrameComposer<F> {
    /// Create a composer with a host-supplied date format
    pub fn with_date_format(config: &FaceConfig, date_format: F) -> Self {
        Self {
            palette: config.palette,
            layout: config.layout,
            date_format,
        }
    }

    /// Compose one frame
    ///
    /// Pure function of its inputs: the same state, bounds and time always
    /// give the same frame.
    pub fn compose(&self, state: &RenderState, bounds: Bounds, now_ms: i64) -> Frame {
        let mut frame = Frame::new();

        let local = state.time_zone.local_time(now_ms);
        let time = format_time(&local);
        let date = self.date_format.format_date(&local);

        let anti_alias = state.text_anti_alias();
        let sizing = state.sizing;
        let cx = bounds.center_x();
        let cy = bounds.center_y();
        let time_px = i32::from(sizing.time_px);

        let background = if state.is_interactive() {
            self.palette.background
        } else {
            Color::BLACK
        };

        push_command(
            &mut frame,
            DrawCommand::FillRect {
                bounds,
                color: background,
            },
        );

        let (time_y, date_y) = if state.is_interactive() {
            (cy.saturating_sub(time_px), cy)
        } else {
            (cy, cy.saturating_add(time_px))
        };

        let time_style = TextStyle {
            color: self.palette.time_text,
            size_px: sizing.time_px,
            anti_alias,
        };
        push_command(&mut frame, text(time, cx, time_y, time_style));

        let date_style = TextStyle {
            color: self.palette.date_text,
            size_px: sizing.date_px,
            anti_alias,
        };
        push_command(&mut frame, text(date, cx, date_y, date_style));

        if state.shows_weather() {
            self.push_weather(&mut frame, state, bounds, anti_alias);
        }

        frame
    }

    fn push_weather(
        &self,
        frame: &mut Frame,
        state: &RenderState,
        bounds: Bounds,
        anti_alias: bool,
    ) {
        let weather = &state.weather;
        let cx = bounds.center_x();
        let row_y = bounds
            .center_y()
            .saturating_add(self.layout.weather_margin_px);
        let column = bounds
            .width
            .checked_div(self.layout.temp_column_divisor)
            .unwrap_or(0);

        let temp_style = TextStyle {
            color: self.palette.temp_text,
            size_px: state.sizing.temp_px,
            anti_alias,
        };

        push_command(
            frame,
            text(
                format_temperature(weather.min_temp_c()),
                cx.saturating_sub(column),
                row_y,
                temp_style,
            ),
        );
        push_command(
            frame,
            text(
                format_temperature(weather.max_temp_c()),
                cx.saturating_add(column),
                row_y,
                temp_style,
            ),
        );

        if let Some(icon) = weather.icon() {
            push_command(
                frame,
                DrawCommand::Bitmap {
                    icon,
                    x: cx,
                    y: row_y,
                    style: BitmapStyle { anti_alias },
                },
            );
        }
    }
}

// A face frame holds at most six commands, below `MAX_DRAW_COMMANDS`
fn push_command(frame: &mut Frame, command: DrawCommand) {
    let pushed = frame.push(command);
    debug_assert!(pushed.is_ok(), "frame capacity exceeded");
}

fn text(text: Label, x: i32, y: i32, style: TextStyle) -> DrawCommand {
    DrawCommand::Text { text, x, y, style }
}
