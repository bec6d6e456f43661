#![forbid(unsafe_code)]

//! Display planes.
//!
//! A plane is one layer of backing store for the screen. The move engine only
//! needs a single primitive from it, [`PlaneBlit::move_rect`], which relocates
//! the pixels that end up in `dest` from `dest - offset`. Implementations must
//! be correct when source and destination overlap inside the one call; the
//! ordering *between* calls is the caller's business.
//!
//! [`PixelPlane`] is the in-memory implementation used by tests, benches and
//! headless servers.

use stratum_core::geometry::{Point, Rect};

/// The pixel-move primitive of a display plane.
pub trait PlaneBlit {
    /// Copy the pixels at `dest - offset` to `dest`.
    ///
    /// Must tolerate overlap between source and destination.
    fn move_rect(&mut self, dest: Rect, offset: Point);
}

impl<P: PlaneBlit + ?Sized> PlaneBlit for &mut P {
    #[inline]
    fn move_rect(&mut self, dest: Rect, offset: Point) {
        (**self).move_rect(dest, offset);
    }
}

/// A `u32`-per-pixel framebuffer covering a rectangle of screen space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelPlane {
    bounds: Rect,
    stride: usize,
    pixels: Vec<u32>,
}

impl PixelPlane {
    /// Create a zero-filled plane covering `bounds`.
    pub fn new(bounds: Rect) -> Self {
        let stride = bounds.width() as usize;
        let len = stride * bounds.height() as usize;
        Self {
            bounds,
            stride,
            pixels: vec![0; len],
        }
    }

    /// Create a plane whose pixels are produced by `f(x, y)`.
    pub fn from_fn(bounds: Rect, mut f: impl FnMut(i32, i32) -> u32) -> Self {
        let mut plane = Self::new(bounds);
        for y in bounds.y0..bounds.y1 {
            for x in bounds.x0..bounds.x1 {
                let idx = plane.index(x, y);
                plane.pixels[idx] = f(x, y);
            }
        }
        plane
    }

    /// Screen area covered by this plane.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Raw pixels, row-major starting at the top-left of [`bounds`](Self::bounds).
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at a screen position, or `None` outside the plane.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.bounds
            .contains(x, y)
            .then(|| self.pixels[self.index(x, y)])
    }

    /// Set a pixel. Writes outside the plane are ignored and return `false`.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: u32) -> bool {
        if !self.bounds.contains(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.pixels[idx] = value;
        true
    }

    /// Fill the part of `rect` that lies on the plane.
    pub fn fill(&mut self, rect: Rect, value: u32) {
        let rect = rect.intersection(&self.bounds);
        for y in rect.y0..rect.y1 {
            let start = self.index(rect.x0, y);
            self.pixels[start..start + rect.width() as usize].fill(value);
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y - self.bounds.y0) as usize * self.stride + (x - self.bounds.x0) as usize
    }
}

impl PlaneBlit for PixelPlane {
    fn move_rect(&mut self, dest: Rect, offset: Point) {
        if offset.is_zero() {
            return;
        }
        // Only move pixels whose source and destination both lie on the plane.
        let src = dest
            .intersection(&self.bounds)
            .translate(-offset)
            .intersection(&self.bounds);
        let dest = src.translate(offset);
        if dest.is_empty() {
            return;
        }

        let width = dest.width() as usize;
        let mut copy_row = |row: i32| {
            let from = self.index(src.x0, src.y0 + row);
            let to = self.index(dest.x0, dest.y0 + row);
            self.pixels.copy_within(from..from + width, to);
        };

        // Moving down reads rows below the ones already written, so walk up.
        if offset.y > 0 {
            (0..dest.height()).rev().for_each(&mut copy_row);
        } else {
            (0..dest.height()).for_each(&mut copy_row);
        }
    }
}
