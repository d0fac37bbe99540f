//! Render requests
//!
//! State changes produce [`RenderRequest`]s; a [`RenderSink`] (the display
//! side) turns them into draw calls. Requests carry copies of the state
//! they show so the sink never reads controller state.

use heapless::Vec;

use crate::cycle::Cycle;
use crate::ui::Button;

/// Most redraws a single state change can produce
pub const MAX_REDRAWS: usize = 6;

/// Redraws produced by one state change, in draw order
pub type Redraws = Vec<RenderRequest, MAX_REDRAWS>;

/// A region of the screen that needs drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderRequest {
    /// Clear the whole screen
    Background,
    /// Every button icon
    Buttons,
    /// A single button icon (after an icon swap)
    Button(Button),
    /// Attribute values next to the edit buttons
    CycleInfo(Cycle),
    /// Cycle name and estimated wash time
    CycleBanner(Cycle),
    /// Blank the estimate line when a run starts
    ClearEstimate,
    /// Minutes remaining in the run
    Countdown(i32),
    /// The run finished
    RunComplete,
    /// Door open/closed indicator
    DoorIndicator { open: bool },
}

/// Consumer of render requests
pub trait RenderSink {
    fn render(&mut self, request: &RenderRequest);

    fn render_all(&mut self, requests: &[RenderRequest]) {
        for request in requests {
            self.render(request);
        }
    }
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn render(&mut self, request: &RenderRequest) {
        (**self).render(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        seen: Vec<RenderRequest, 8>,
    }

    impl RenderSink for Recorder {
        fn render(&mut self, request: &RenderRequest) {
            let _ = self.seen.push(*request);
        }
    }

    #[test]
    fn test_render_all_preserves_order() {
        let mut sink = Recorder { seen: Vec::new() };
        let requests = [
            RenderRequest::Background,
            RenderRequest::Countdown(3),
            RenderRequest::RunComplete,
        ];

        (&mut sink).render_all(&requests);
        assert_eq!(sink.seen.as_slice(), &requests);
    }
}
