#![forbid(unsafe_code)]

//! Recording stand-ins for the engine's collaborators.

use stratum_core::geometry::{Point, Rect};
use stratum_render::plane::PlaneBlit;
use stratum_server::clip::ClipVisitor;

/// A plane that only logs the blits it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingPlane {
    pub blits: Vec<(Rect, Point)>,
}

impl PlaneBlit for RecordingPlane {
    fn move_rect(&mut self, dest: Rect, offset: Point) {
        self.blits.push((dest, offset));
    }
}

/// A clip visitor that keeps every piece it is shown.
#[derive(Debug, Clone, Default)]
pub struct ClipRecorder {
    pub visible: Vec<Rect>,
    pub obscured: Vec<Rect>,
}

impl ClipRecorder {
    /// Visible then obscured pieces.
    pub fn all(&self) -> impl Iterator<Item = &Rect> {
        self.visible.iter().chain(self.obscured.iter())
    }
}

impl ClipVisitor for ClipRecorder {
    fn visible(&mut self, rect: Rect) {
        self.visible.push(rect);
    }

    fn obscured(&mut self, rect: Rect) {
        self.obscured.push(rect);
    }
}
