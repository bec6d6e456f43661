#![forbid(unsafe_code)]

//! Window table and z-order.
//!
//! [`WindowStack`] owns every window and their stacking order, bottom to top,
//! plus the background bounds (the screen). Windows are addressed by
//! [`WindowId`] index rather than by reference so that nothing outside the
//! table holds a pointer into it; [`ZChain`] is the borrowed view of "the
//! windows above X" that clipping walks.
//!
//! # Invariants
//!
//! 1. Every issued id appears exactly once in the z-order.
//! 2. The background is not a window; it bounds every move.

use bitflags::bitflags;
use stratum_core::geometry::{Point, Rect};
use stratum_core::id::WindowId;

use crate::error::ServerError;

bitflags! {
    /// Per-window state bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u8 {
        /// Unmapped: the window neither draws nor occludes.
        const HIDDEN = 1 << 0;
    }
}

/// Geometry and state of one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Screen-space rectangle occupied by the window.
    pub bounds: Rect,
    /// Translation from window-local to screen coordinates.
    pub origin: Point,
    pub flags: WindowFlags,
}

impl Window {
    /// A visible window whose local origin is its top-left corner.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            origin: bounds.origin(),
            flags: WindowFlags::empty(),
        }
    }

    /// Override the local-to-screen translation.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.flags.contains(WindowFlags::HIDDEN)
    }

    /// Map a window-local rectangle to screen coordinates.
    #[inline]
    pub fn to_screen(&self, local: Rect) -> Rect {
        local.translate(self.origin)
    }
}

/// The windows stacked above some window, nearest first.
#[derive(Debug, Clone, Copy)]
pub struct ZChain<'a> {
    windows: &'a [Window],
    ids: &'a [WindowId],
}

impl<'a> ZChain<'a> {
    /// Number of windows in the chain, hidden ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Bounds of the window at `depth` if it can occlude anything.
    #[inline]
    pub fn occluder(&self, depth: usize) -> Option<Rect> {
        let window = &self.windows[self.ids.get(depth)?.index()];
        window.is_visible().then_some(window.bounds)
    }

    /// Ids in the chain, nearest first.
    pub fn ids(&self) -> &'a [WindowId] {
        self.ids
    }
}

/// Server-owned window table.
#[derive(Debug, Clone)]
pub struct WindowStack {
    background: Rect,
    windows: Vec<Window>,
    z_order: Vec<WindowId>,
}

impl WindowStack {
    /// An empty stack over the given screen bounds.
    pub fn new(background: Rect) -> Self {
        Self {
            background,
            windows: Vec::new(),
            z_order: Vec::new(),
        }
    }

    /// Screen bounds beyond which no content is valid.
    #[inline]
    pub fn background(&self) -> Rect {
        self.background
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Add a window on top of the stack.
    pub fn insert(&mut self, window: Window) -> WindowId {
        let id = WindowId::new(self.windows.len() as u32);
        self.windows.push(window);
        self.z_order.push(id);
        id
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(id.index())
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(id.index())
    }

    /// Window at `id`, or [`ServerError::UnknownWindow`].
    pub fn window(&self, id: WindowId) -> Result<&Window, ServerError> {
        self.get(id).ok_or(ServerError::UnknownWindow(id))
    }

    /// Stacking position, 0 being the bottom.
    pub fn z_position(&self, id: WindowId) -> Option<usize> {
        self.z_order.iter().position(|&w| w == id)
    }

    /// Ids bottom to top.
    pub fn z_order(&self) -> &[WindowId] {
        &self.z_order
    }

    /// The windows above `id`, nearest first.
    pub fn above(&self, id: WindowId) -> Result<ZChain<'_>, ServerError> {
        let pos = self.z_position(id).ok_or(ServerError::UnknownWindow(id))?;
        Ok(ZChain {
            windows: &self.windows,
            ids: &self.z_order[pos + 1..],
        })
    }

    /// Move a window to the top of the stack.
    pub fn raise(&mut self, id: WindowId) -> Result<(), ServerError> {
        let pos = self.z_position(id).ok_or(ServerError::UnknownWindow(id))?;
        let id = self.z_order.remove(pos);
        self.z_order.push(id);
        Ok(())
    }

    /// Move a window to the bottom of the stack.
    pub fn lower(&mut self, id: WindowId) -> Result<(), ServerError> {
        let pos = self.z_position(id).ok_or(ServerError::UnknownWindow(id))?;
        let id = self.z_order.remove(pos);
        self.z_order.insert(0, id);
        Ok(())
    }

    /// Map or unmap a window.
    pub fn set_hidden(&mut self, id: WindowId, hidden: bool) -> Result<(), ServerError> {
        let window = self.get_mut(id).ok_or(ServerError::UnknownWindow(id))?;
        window.flags.set(WindowFlags::HIDDEN, hidden);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack3() -> (WindowStack, [WindowId; 3]) {
        let mut stack = WindowStack::new(Rect::new(0, 0, 100, 100));
        let a = stack.insert(Window::new(Rect::new(0, 0, 50, 50)));
        let b = stack.insert(Window::new(Rect::new(10, 10, 60, 60)));
        let c = stack.insert(Window::new(Rect::new(20, 20, 70, 70)));
        (stack, [a, b, c])
    }

    #[test]
    fn insert_stacks_on_top() {
        let (stack, [a, b, c]) = stack3();
        assert_eq!(stack.z_order(), &[a, b, c]);
        assert_eq!(stack.above(a).unwrap().ids(), &[b, c]);
        assert!(stack.above(c).unwrap().is_empty());
    }

    #[test]
    fn raise_and_lower_reorder() {
        let (mut stack, [a, b, c]) = stack3();
        stack.raise(a).unwrap();
        assert_eq!(stack.z_order(), &[b, c, a]);
        stack.lower(c).unwrap();
        assert_eq!(stack.z_order(), &[c, b, a]);
        assert_eq!(stack.above(c).unwrap().len(), 2);
    }

    #[test]
    fn hidden_windows_do_not_occlude() {
        let (mut stack, [a, b, _]) = stack3();
        stack.set_hidden(b, true).unwrap();
        let chain = stack.above(a).unwrap();
        assert_eq!(chain.occluder(0), None);
        assert_eq!(chain.occluder(1), Some(Rect::new(20, 20, 70, 70)));
        assert_eq!(chain.occluder(2), None);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let (mut stack, _) = stack3();
        let ghost = WindowId::new(99);
        assert_eq!(stack.above(ghost).unwrap_err(), ServerError::UnknownWindow(ghost));
        assert!(stack.raise(ghost).is_err());
        assert!(stack.set_hidden(ghost, true).is_err());
        assert!(stack.window(ghost).is_err());
    }

    #[test]
    fn window_origin_defaults_to_corner() {
        let w = Window::new(Rect::new(5, 7, 10, 10));
        assert_eq!(w.origin, Point::new(5, 7));
        assert_eq!(w.to_screen(Rect::new(0, 0, 2, 2)), Rect::new(5, 7, 7, 9));
        let w = w.with_origin(Point::new(-1, -1));
        assert_eq!(w.to_screen(Rect::new(0, 0, 2, 2)), Rect::new(-1, -1, 1, 1));
    }
}
