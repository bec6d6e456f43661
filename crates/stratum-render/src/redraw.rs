#![forbid(unsafe_code)]

//! Redraw requests.
//!
//! When pixels cannot be copied into place the server asks the owning window
//! to repaint them. [`RedrawSink`] is that request channel; [`RedrawQueue`]
//! is an idempotent, bounded implementation that never loses area: when a
//! window exceeds its pending limit its requests collapse into one bounding
//! box instead of being dropped.

use smallvec::SmallVec;
use stratum_core::geometry::Rect;
use stratum_core::id::WindowId;

/// Default per-window pending request limit.
pub const DEFAULT_REDRAW_LIMIT: usize = 32;

/// Accepts requests to repaint a screen rectangle of a window.
pub trait RedrawSink {
    /// Mark `rect` (screen coordinates) dirty for `window`.
    fn request(&mut self, window: WindowId, rect: Rect);
}

impl<S: RedrawSink + ?Sized> RedrawSink for &mut S {
    #[inline]
    fn request(&mut self, window: WindowId, rect: Rect) {
        (**self).request(window, rect);
    }
}

/// Records every request verbatim, in order.
impl RedrawSink for Vec<(WindowId, Rect)> {
    fn request(&mut self, window: WindowId, rect: Rect) {
        self.push((window, rect));
    }
}

/// Pending redraw requests, coalesced per window.
#[derive(Debug, Clone)]
pub struct RedrawQueue {
    pending: SmallVec<[(WindowId, Rect); 8]>,
    limit: usize,
}

impl Default for RedrawQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RedrawQueue {
    /// Create a queue with [`DEFAULT_REDRAW_LIMIT`].
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_REDRAW_LIMIT)
    }

    /// Create a queue holding at most `limit` rectangles per window
    /// (clamped to at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            pending: SmallVec::new(),
            limit: limit.max(1),
        }
    }

    /// Per-window pending limit.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Total pending rectangles across all windows.
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending requests in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &(WindowId, Rect)> {
        self.pending.iter()
    }

    /// Pending rectangles for one window.
    pub fn for_window(&self, window: WindowId) -> impl Iterator<Item = Rect> + '_ {
        self.pending
            .iter()
            .filter(move |(w, _)| *w == window)
            .map(|(_, r)| *r)
    }

    /// Take every pending request, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<(WindowId, Rect)> {
        self.pending.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    fn collapse(&mut self, window: WindowId, rect: Rect) {
        let mut bbox = rect;
        self.pending.retain(|(w, r)| {
            if *w == window {
                bbox = bbox.union(r);
                false
            } else {
                true
            }
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(%window, %bbox, "redraw queue collapsed to bounding box");
        self.pending.push((window, bbox));
    }
}

impl RedrawSink for RedrawQueue {
    fn request(&mut self, window: WindowId, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        if self
            .pending
            .iter()
            .any(|(w, r)| *w == window && r.contains_rect(&rect))
        {
            return;
        }
        self.pending
            .retain(|(w, r)| !(*w == window && rect.contains_rect(r)));

        if self.for_window(window).count() >= self.limit {
            self.collapse(window, rect);
        } else {
            self.pending.push((window, rect));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: WindowId = WindowId::new(1);
    const B: WindowId = WindowId::new(2);

    #[test]
    fn empty_requests_are_dropped() {
        let mut q = RedrawQueue::new();
        q.request(A, Rect::EMPTY);
        q.request(A, Rect::new(5, 5, 5, 9));
        assert!(q.is_empty());
    }

    #[test]
    fn duplicate_and_contained_requests_are_idempotent() {
        let mut q = RedrawQueue::new();
        q.request(A, Rect::new(0, 0, 10, 10));
        q.request(A, Rect::new(0, 0, 10, 10));
        q.request(A, Rect::new(2, 2, 4, 4));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn larger_request_absorbs_smaller_ones() {
        let mut q = RedrawQueue::new();
        q.request(A, Rect::new(2, 2, 4, 4));
        q.request(A, Rect::new(6, 6, 8, 8));
        q.request(B, Rect::new(2, 2, 4, 4));
        q.request(A, Rect::new(0, 0, 10, 10));
        assert_eq!(q.for_window(A).collect::<Vec<_>>(), vec![Rect::new(0, 0, 10, 10)]);
        assert_eq!(q.for_window(B).count(), 1);
    }

    #[test]
    fn overflow_collapses_without_losing_area() {
        let mut q = RedrawQueue::with_limit(2);
        q.request(A, Rect::new(0, 0, 1, 1));
        q.request(A, Rect::new(5, 5, 6, 6));
        q.request(B, Rect::new(0, 0, 1, 1));
        q.request(A, Rect::new(9, 0, 10, 1));
        let a: Vec<Rect> = q.for_window(A).collect();
        assert_eq!(a, vec![Rect::new(0, 0, 10, 6)]);
        assert_eq!(q.for_window(B).count(), 1);
    }

    #[test]
    fn drain_empties_queue_in_order() {
        let mut q = RedrawQueue::new();
        q.request(A, Rect::new(0, 0, 1, 1));
        q.request(B, Rect::new(1, 1, 2, 2));
        let drained = q.drain();
        assert_eq!(drained, vec![(A, Rect::new(0, 0, 1, 1)), (B, Rect::new(1, 1, 2, 2))]);
        assert!(q.is_empty());
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(RedrawQueue::with_limit(0).limit(), 1);
    }

    #[test]
    fn vec_sink_records_verbatim() {
        let mut log: Vec<(WindowId, Rect)> = Vec::new();
        let sink: &mut dyn RedrawSink = &mut log;
        sink.request(A, Rect::EMPTY);
        assert_eq!(log.len(), 1);
    }
}
