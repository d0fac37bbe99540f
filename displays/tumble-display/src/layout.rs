//! Fixed 480x320 screen layout
//!
//! All rectangles are `(x0, y0, x1, y1)` with inclusive corners.

use crate::backend::Color;

/// Screen size in pixels
pub const SCREEN_WIDTH: u16 = 480;
pub const SCREEN_HEIGHT: u16 = 320;

pub const BACKGROUND: Color = Color::WHITE;
pub const TEXT: Color = Color::BLACK;

/// Left edge of the attribute values next to the edit buttons
pub const INFO_X: u16 = 80;
/// Right edge of the attribute value area
pub const INFO_X_END: u16 = 150;
/// Height of one attribute value row
pub const INFO_ROW_HEIGHT: u16 = 40;

/// Value rows: rinse count, spin time, bubbles, heavy duty
pub const INFO_RINSE_Y: u16 = 40;
pub const INFO_SPIN_Y: u16 = 120;
pub const INFO_BUBBLES_Y: u16 = 200;
pub const INFO_HEAVY_Y: u16 = 280;

/// Cycle name line
pub const BANNER_X: u16 = 160;
pub const BANNER_Y: u16 = 130;
pub const BANNER_CLEAR: (u16, u16, u16, u16) = (160, 130, 420, 170);

/// Estimated wash time line
pub const ESTIMATE_X: u16 = 160;
pub const ESTIMATE_Y: u16 = 170;

/// Size of the area cleared before a time line is drawn
pub const TIME_CLEAR_WIDTH: u16 = 270;
pub const TIME_CLEAR_HEIGHT: u16 = 40;

/// Area blanked when a run starts
pub const RUN_START_CLEAR: (u16, u16, u16, u16) = (160, 170, 450, 200);

/// Countdown line during a run
pub const COUNTDOWN_X: u16 = 150;
pub const COUNTDOWN_Y: u16 = 130;

/// Door indicator circle
pub const DOOR_CX: u16 = 445;
pub const DOOR_CY: u16 = 30;
pub const DOOR_R: u16 = 20;
pub const DOOR_CLOSED: Color = Color::RED;
pub const DOOR_OPEN: Color = Color::GREEN;

/// Area cleared before a time line at `(x, y)`
pub const fn time_clear(x: u16, y: u16) -> (u16, u16, u16, u16) {
    (x, y, x + TIME_CLEAR_WIDTH, y + TIME_CLEAR_HEIGHT)
}
