use serde::Serialize;

use crate::Frame;

/// Viewport fit the surface should schedule after a committed transition.
/// The controller does not wait for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitRequest {
    pub padding: f32,
    pub include_hidden: bool,
    pub duration_ms: u32,
}

impl FitRequest {
    pub fn desktop() -> Self {
        Self {
            padding: 0.1,
            include_hidden: false,
            duration_ms: 800,
        }
    }

    pub fn mobile() -> Self {
        Self {
            padding: 0.2,
            include_hidden: true,
            duration_ms: 800,
        }
    }
}

/// What the host rendering surface has to provide.
pub trait Surface {
    fn present(&mut self, frame: &Frame);
    fn fit_view(&mut self, request: FitRequest);
    fn notify(&mut self, message: &str);
}

/// Keeps everything it is sent. Handy for headless hosts and tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub frames: Vec<Frame>,
    pub fits: Vec<FitRequest>,
    pub notices: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Surface for RecordingSurface {
    fn present(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn fit_view(&mut self, request: FitRequest) {
        self.fits.push(request);
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
