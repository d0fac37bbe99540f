//! Render request to canvas translation

use core::fmt::Write;

use heapless::String;
use tumble_core::cycle::Cycle;
use tumble_core::render::{RenderRequest, RenderSink};
use tumble_core::ui::{Button, BUTTON_COUNT};

use crate::backend::{Canvas, DisplayError};
use crate::icons::IconSet;
use crate::layout::*;

/// Longest text line drawn by the renderer
const LINE_LEN: usize = 40;

/// Draws render requests on a canvas
///
/// Keeps its own copy of the button table so icon swaps reported through
/// [`RenderRequest::Button`] survive a later full redraw.
pub struct Renderer<C, I> {
    canvas: C,
    icons: I,
    buttons: [Button; BUTTON_COUNT],
    last_error: Option<DisplayError>,
}

impl<C: Canvas, I: IconSet> Renderer<C, I> {
    pub fn new(canvas: C, icons: I, buttons: [Button; BUTTON_COUNT]) -> Self {
        Self {
            canvas,
            icons,
            buttons,
            last_error: None,
        }
    }

    /// Draw one request, stopping at the first failing primitive
    pub fn draw(&mut self, request: &RenderRequest) -> Result<(), DisplayError> {
        match request {
            RenderRequest::Background => {
                self.canvas.set_foreground(BACKGROUND)?;
                self.canvas
                    .fill_rect(0, 0, SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1)
            }
            RenderRequest::Buttons => {
                for button in self.buttons {
                    self.draw_button(&button)?;
                }
                Ok(())
            }
            RenderRequest::Button(button) => {
                if let Some(slot) = self.buttons.iter_mut().find(|b| b.id == button.id) {
                    *slot = *button;
                }
                self.draw_button(button)
            }
            RenderRequest::CycleInfo(cycle) => self.draw_info(cycle),
            RenderRequest::CycleBanner(cycle) => self.draw_banner(cycle),
            RenderRequest::ClearEstimate => {
                let (x0, y0, x1, y1) = RUN_START_CLEAR;
                self.canvas.set_foreground(BACKGROUND)?;
                self.canvas.fill_rect(x0, y0, x1, y1)
            }
            RenderRequest::Countdown(minutes) => {
                self.draw_time(COUNTDOWN_X, COUNTDOWN_Y, *minutes)
            }
            RenderRequest::RunComplete => {
                let (x0, y0, x1, y1) = time_clear(COUNTDOWN_X, COUNTDOWN_Y);
                self.canvas.set_foreground(BACKGROUND)?;
                self.canvas.fill_rect(x0, y0, x1, y1)?;
                self.canvas.set_foreground(TEXT)?;
                self.canvas
                    .draw_text(COUNTDOWN_X, COUNTDOWN_Y, "Cycle complete")
            }
            RenderRequest::DoorIndicator { open } => {
                let color = if *open { DOOR_OPEN } else { DOOR_CLOSED };
                self.canvas.set_foreground(color)?;
                self.canvas.fill_circle(DOOR_CX, DOOR_CY, DOOR_R)
            }
        }
    }

    fn draw_button(&mut self, button: &Button) -> Result<(), DisplayError> {
        let pixmap = self.icons.icon(button.icon);
        if !pixmap.is_well_formed() {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.canvas.draw_pixmap(
            button.rect.x,
            button.rect.y,
            pixmap.width,
            pixmap.height,
            pixmap.data,
        )
    }

    fn draw_info(&mut self, cycle: &Cycle) -> Result<(), DisplayError> {
        self.canvas.set_foreground(BACKGROUND)?;
        for y in [INFO_RINSE_Y, INFO_SPIN_Y, INFO_BUBBLES_Y, INFO_HEAVY_Y] {
            self.canvas
                .fill_rect(INFO_X, y, INFO_X_END, y + INFO_ROW_HEIGHT - 1)?;
        }

        let mut line: String<LINE_LEN> = String::new();
        self.canvas.set_foreground(TEXT)?;

        let _ = write!(line, "x{}", cycle.rinse_count);
        self.canvas.draw_text(INFO_X, INFO_RINSE_Y, &line)?;

        line.clear();
        let _ = write!(line, "x{}", cycle.spin_minutes);
        self.canvas.draw_text(INFO_X, INFO_SPIN_Y, &line)?;

        self.canvas
            .draw_text(INFO_X, INFO_BUBBLES_Y, flag_text(cycle.bubbles))?;
        self.canvas
            .draw_text(INFO_X, INFO_HEAVY_Y, flag_text(cycle.heavy_duty))
    }

    fn draw_banner(&mut self, cycle: &Cycle) -> Result<(), DisplayError> {
        let (x0, y0, x1, y1) = BANNER_CLEAR;
        self.canvas.set_foreground(BACKGROUND)?;
        self.canvas.fill_rect(x0, y0, x1, y1)?;

        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(line, "Cycle: {}", cycle.name);
        self.canvas.set_foreground(TEXT)?;
        self.canvas.draw_text(BANNER_X, BANNER_Y, &line)?;

        self.draw_time(ESTIMATE_X, ESTIMATE_Y, cycle.total_minutes())
    }

    fn draw_time(&mut self, x: u16, y: u16, minutes: i32) -> Result<(), DisplayError> {
        let (x0, y0, x1, y1) = time_clear(x, y);
        self.canvas.set_foreground(BACKGROUND)?;
        self.canvas.fill_rect(x0, y0, x1, y1)?;

        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(line, "Wash time: {} min", minutes);
        self.canvas.set_foreground(TEXT)?;
        self.canvas.draw_text(x, y, &line)
    }

    /// Error from the most recent failed request, cleared on read
    pub fn take_error(&mut self) -> Option<DisplayError> {
        self.last_error.take()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }
}

fn flag_text(enabled: bool) -> &'static str {
    if enabled {
        "1"
    } else {
        "0"
    }
}

impl<C: Canvas, I: IconSet> RenderSink for Renderer<C, I> {
    fn render(&mut self, request: &RenderRequest) {
        // Drawing is best effort; the caller may poll take_error()
        if let Err(e) = self.draw(request) {
            self.last_error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Color;
    use crate::icons::Pixmap;
    use heapless::Vec;
    use tumble_core::config::DEFAULT_PRESETS;
    use tumble_core::ui::{ButtonId, IconId, DEFAULT_LAYOUT};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Fg(Color),
        Rect(u16, u16, u16, u16),
        Circle(u16, u16, u16),
        Pixmap(u16, u16, u16, u16),
        Text(u16, u16, String<LINE_LEN>),
    }

    #[derive(Default)]
    struct MockCanvas {
        ops: Vec<Op, 64>,
        fail_text: bool,
    }

    impl MockCanvas {
        fn texts(&self) -> impl Iterator<Item = &str> {
            self.ops.iter().filter_map(|op| match op {
                Op::Text(_, _, s) => Some(s.as_str()),
                _ => None,
            })
        }
    }

    impl Canvas for MockCanvas {
        fn set_foreground(&mut self, color: Color) -> Result<(), DisplayError> {
            let _ = self.ops.push(Op::Fg(color));
            Ok(())
        }

        fn fill_rect(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
            let _ = self.ops.push(Op::Rect(x0, y0, x1, y1));
            Ok(())
        }

        fn fill_circle(&mut self, cx: u16, cy: u16, r: u16) -> Result<(), DisplayError> {
            let _ = self.ops.push(Op::Circle(cx, cy, r));
            Ok(())
        }

        fn draw_pixmap(
            &mut self,
            x: u16,
            y: u16,
            width: u16,
            height: u16,
            _pixels: &[u8],
        ) -> Result<(), DisplayError> {
            let _ = self.ops.push(Op::Pixmap(x, y, width, height));
            Ok(())
        }

        fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError> {
            if self.fail_text {
                return Err(DisplayError::Communication);
            }
            let mut s = String::new();
            let _ = s.push_str(text);
            let _ = self.ops.push(Op::Text(x, y, s));
            Ok(())
        }
    }

    static ICON_60: [u8; 60 * 60 * 2] = [0; 60 * 60 * 2];
    static ICON_100: [u8; 100 * 80 * 2] = [0; 100 * 80 * 2];

    struct FlatIcons;

    impl IconSet for FlatIcons {
        fn icon(&self, id: IconId) -> Pixmap {
            match id {
                IconId::Play | IconId::Forward | IconId::Backward => {
                    Pixmap::new(100, 80, &ICON_100)
                }
                // Locked icon deliberately malformed
                IconId::Locked => Pixmap::new(60, 61, &ICON_60),
                _ => Pixmap::new(60, 60, &ICON_60),
            }
        }
    }

    fn renderer() -> Renderer<MockCanvas, FlatIcons> {
        Renderer::new(MockCanvas::default(), FlatIcons, DEFAULT_LAYOUT)
    }

    #[test]
    fn test_background_fills_screen() {
        let mut r = renderer();
        r.render(&RenderRequest::Background);
        assert_eq!(
            r.canvas().ops.as_slice(),
            &[Op::Fg(Color::WHITE), Op::Rect(0, 0, 479, 319)]
        );
    }

    #[test]
    fn test_buttons_draw_every_icon() {
        let mut r = renderer();
        r.render(&RenderRequest::Buttons);

        let blits = r
            .canvas()
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Pixmap(..)))
            .count();
        assert_eq!(blits, BUTTON_COUNT);
        assert_eq!(r.canvas().ops[0], Op::Pixmap(360, 10, 60, 60));
        assert!(r.take_error().is_none());
    }

    #[test]
    fn test_banner_shows_name_and_estimate() {
        let mut r = renderer();
        let heavy = DEFAULT_PRESETS[2];
        r.render(&RenderRequest::CycleBanner(heavy));

        let texts: Vec<&str, 4> = r.canvas().texts().collect();
        assert_eq!(texts.as_slice(), &["Cycle: Heavy", "Wash time: 30 min"]);
        assert!(r.canvas().ops.contains(&Op::Rect(160, 130, 420, 170)));
        assert!(r.canvas().ops.contains(&Op::Rect(160, 170, 430, 210)));
    }

    #[test]
    fn test_info_values() {
        let mut r = renderer();
        let daily = DEFAULT_PRESETS[1];
        r.render(&RenderRequest::CycleInfo(daily));

        let texts: Vec<&str, 4> = r.canvas().texts().collect();
        assert_eq!(texts.as_slice(), &["x2", "x8", "1", "0"]);
        assert!(r.canvas().ops.contains(&Op::Rect(80, 280, 150, 319)));
    }

    #[test]
    fn test_countdown_and_completion() {
        let mut r = renderer();
        r.render(&RenderRequest::ClearEstimate);
        r.render(&RenderRequest::Countdown(-2));
        r.render(&RenderRequest::RunComplete);

        assert_eq!(r.canvas().ops[1], Op::Rect(160, 170, 450, 200));
        let texts: Vec<&str, 4> = r.canvas().texts().collect();
        assert_eq!(texts.as_slice(), &["Wash time: -2 min", "Cycle complete"]);
    }

    #[test]
    fn test_door_colors() {
        let mut r = renderer();
        r.render(&RenderRequest::DoorIndicator { open: false });
        r.render(&RenderRequest::DoorIndicator { open: true });

        assert_eq!(
            r.canvas().ops.as_slice(),
            &[
                Op::Fg(Color::RED),
                Op::Circle(445, 30, 20),
                Op::Fg(Color::GREEN),
                Op::Circle(445, 30, 20)
            ]
        );
    }

    #[test]
    fn test_button_update_is_remembered() {
        let mut r = renderer();
        let mut lock = DEFAULT_LAYOUT[0];
        lock.icon = IconId::Locked;

        // Malformed icon is reported, not drawn
        r.render(&RenderRequest::Button(lock));
        assert_eq!(r.take_error(), Some(DisplayError::InvalidCoordinates));
        assert!(r.canvas().ops.is_empty());

        r.render(&RenderRequest::Buttons);
        assert_eq!(r.take_error(), Some(DisplayError::InvalidCoordinates));
        assert!(r.take_error().is_none());
        assert_eq!(r.buttons[0].id, ButtonId::Lock);
        assert_eq!(r.buttons[0].icon, IconId::Locked);
    }

    #[test]
    fn test_failure_stops_request() {
        let mut r = renderer();
        r.canvas_mut().fail_text = true;
        r.render(&RenderRequest::CycleInfo(DEFAULT_PRESETS[0]));

        assert_eq!(r.take_error(), Some(DisplayError::Communication));
        // Clears and the text colour change ran; nothing after the failed text
        assert_eq!(r.canvas().ops.last(), Some(&Op::Fg(Color::BLACK)));
    }
}
