#![forbid(unsafe_code)]

//! Deterministic scene generation.
//!
//! Benches and the fuzz target need reproducible window stacks without
//! pulling in a property-testing framework; [`Lcg`] and [`Scene::generate`]
//! provide them from a single seed.

use stratum_core::geometry::{Point, Rect};
use stratum_core::id::WindowId;
use stratum_render::plane::PixelPlane;
use stratum_server::window::{Window, WindowStack};

/// Simple LCG for deterministic test data.
#[derive(Debug, Clone)]
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        self.0
    }

    /// Uniform-ish value in `lo..hi` (returns `lo` for an empty range).
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as u64;
        lo + ((self.next_u64() >> 16) % span) as i32
    }

    pub fn rect_within(&mut self, area: Rect, max_size: i32) -> Rect {
        let x = self.range(area.x0, area.x1);
        let y = self.range(area.y0, area.y1);
        let w = self.range(1, max_size + 1);
        let h = self.range(1, max_size + 1);
        Rect::from_origin_size(x, y, w, h)
    }
}

/// A window stack with one designated window to move within.
#[derive(Debug, Clone)]
pub struct Scene {
    pub stack: WindowStack,
    pub target: WindowId,
}

impl Scene {
    /// Screen `width x height`, a target window, `above` windows on top of it
    /// and a couple below. Windows may hang off the screen.
    pub fn generate(seed: u64, width: i32, height: i32, above: usize) -> Self {
        let mut rng = Lcg::new(seed);
        let screen = Rect::new(0, 0, width, height);
        let slack = Rect::new(-width / 4, -height / 4, width, height);
        let max_size = width.max(height) / 2;

        let mut stack = WindowStack::new(screen);
        for _ in 0..2 {
            stack.insert(Window::new(rng.rect_within(slack, max_size)));
        }
        let bounds = Rect::new(
            rng.range(-width / 8, width / 4),
            rng.range(-height / 8, height / 4),
            rng.range(width * 3 / 4, width + width / 8),
            rng.range(height * 3 / 4, height + height / 8),
        );
        let target = stack.insert(Window::new(bounds));
        for _ in 0..above {
            stack.insert(Window::new(rng.rect_within(slack, max_size)));
        }
        Self { stack, target }
    }

    /// A random window-local rectangle and offset for this scene.
    pub fn random_move(&self, rng: &mut Lcg) -> (Rect, Point) {
        let screen = self.stack.background();
        let local = Rect::new(-4, -4, screen.width(), screen.height());
        let rect = rng.rect_within(local, screen.width().max(screen.height()) / 2);
        let offset = Point::new(
            rng.range(-screen.width() / 3, screen.width() / 3 + 1),
            rng.range(-screen.height() / 3, screen.height() / 3 + 1),
        );
        (rect, offset)
    }

    /// A plane covering the screen with a distinct value per pixel.
    pub fn numbered_plane(&self) -> PixelPlane {
        let screen = self.stack.background();
        let stride = screen.width().max(1);
        PixelPlane::from_fn(screen, |x, y| (y * stride + x) as u32 + 1)
    }
}
