//! Point-to-button resolution

use super::button::Button;
use crate::touch::ScreenPoint;

/// Find the first button containing `point`
///
/// Buttons are checked in slice order; edges are inclusive.
pub fn hit_test(buttons: &[Button], point: ScreenPoint) -> Option<&Button> {
    buttons.iter().find(|button| button.rect.contains(point))
}
