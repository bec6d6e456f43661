#![forbid(unsafe_code)]

//! Pixel-by-pixel reference model of a region move.
//!
//! The model ignores clipping order entirely. For every destination pixel it
//! decides, from the stack alone, whether the pixel is owned by a higher
//! window (untouched), must be repainted (off screen, or its source is
//! outside the window, off screen, or covered), or receives the source pixel
//! from the untouched "before" image. An engine run is correct
//! when it agrees with the model on every pixel and schedules exactly the
//! model's repaint set.

use std::collections::BTreeSet;

use stratum_core::geometry::{Point, Rect};
use stratum_core::id::WindowId;
use stratum_render::plane::PixelPlane;
use stratum_server::window::WindowStack;

/// A set of screen pixels.
pub type PixelSet = BTreeSet<(i32, i32)>;

/// Expected outcome of one region move.
#[derive(Debug, Clone)]
pub struct ExpectedMove {
    /// The plane after the move. Pixels in [`redraw`](Self::redraw) keep
    /// their old value; the model makes no claim about them.
    pub plane: PixelPlane,
    /// Pixels that must be scheduled for repaint.
    pub redraw: PixelSet,
}

/// A disagreement between an engine run and the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    Pixel {
        x: i32,
        y: i32,
        expected: Option<u32>,
        actual: Option<u32>,
    },
    MissingRedraw { x: i32, y: i32 },
    ExtraRedraw { x: i32, y: i32 },
}

/// Every pixel covered by `rects`.
pub fn pixels_of<'r>(rects: impl IntoIterator<Item = &'r Rect>) -> PixelSet {
    let mut set = PixelSet::new();
    for r in rects {
        for y in r.y0..r.y1 {
            for x in r.x0..r.x1 {
                set.insert((x, y));
            }
        }
    }
    set
}

/// Total area of `rects`, counting overlaps twice.
pub fn total_area<'r>(rects: impl IntoIterator<Item = &'r Rect>) -> u64 {
    rects.into_iter().map(Rect::area).sum()
}

fn occluded(stack: &WindowStack, window: WindowId, x: i32, y: i32) -> bool {
    let Ok(chain) = stack.above(window) else {
        return false;
    };
    (0..chain.len()).any(|depth| chain.occluder(depth).is_some_and(|b| b.contains(x, y)))
}

/// Compute the expected result of moving `rect` (window-local) by `offset`.
///
/// Unknown or hidden windows and zero offsets expect no change.
pub fn expected_move(
    stack: &WindowStack,
    window: WindowId,
    rect: Rect,
    offset: Point,
    before: &PixelPlane,
) -> ExpectedMove {
    let mut expected = ExpectedMove {
        plane: before.clone(),
        redraw: PixelSet::new(),
    };
    let Some(wnd) = stack.get(window) else {
        return expected;
    };
    if !wnd.is_visible() {
        return expected;
    }

    if offset.is_zero() {
        return expected;
    }

    let background = stack.background();
    let src_bound = wnd.bounds.intersection(&background);
    let dest = wnd.to_screen(rect).translate(offset).intersection(&wnd.bounds);

    for y in dest.y0..dest.y1 {
        for x in dest.x0..dest.x1 {
            if occluded(stack, window, x, y) {
                continue;
            }
            let (sx, sy) = (x - offset.x, y - offset.y);
            if !background.contains(x, y)
                || !src_bound.contains(sx, sy)
                || occluded(stack, window, sx, sy)
            {
                expected.redraw.insert((x, y));
                continue;
            }
            if let Some(value) = before.get(sx, sy) {
                expected.plane.set(x, y, value);
            }
        }
    }
    expected
}

/// Compare an engine run against the model.
///
/// `redraws` is every rectangle the engine sent to its sink. Returns all
/// mismatches, logging each at `warn`.
pub fn compare(expected: &ExpectedMove, actual: &PixelPlane, redraws: &[Rect]) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    let bounds = actual.bounds();

    for y in bounds.y0..bounds.y1 {
        for x in bounds.x0..bounds.x1 {
            if expected.redraw.contains(&(x, y)) {
                continue;
            }
            let (want, got) = (expected.plane.get(x, y), actual.get(x, y));
            if want != got {
                mismatches.push(Mismatch::Pixel {
                    x,
                    y,
                    expected: want,
                    actual: got,
                });
            }
        }
    }

    let scheduled = pixels_of(redraws);
    for &(x, y) in expected.redraw.difference(&scheduled) {
        mismatches.push(Mismatch::MissingRedraw { x, y });
    }
    for &(x, y) in scheduled.difference(&expected.redraw) {
        mismatches.push(Mismatch::ExtraRedraw { x, y });
    }

    for m in &mismatches {
        tracing::warn!(mismatch = ?m, "region move disagrees with reference");
    }
    mismatches
}
