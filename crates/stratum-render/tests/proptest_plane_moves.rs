//! Property tests for `PixelPlane::move_rect`.
//!
//! The in-place move must match a copy taken from an untouched snapshot,
//! for any destination and any offset, including overlapping ones and ones
//! that reach off the plane.

use proptest::prelude::*;
use stratum_core::geometry::{Point, Rect};
use stratum_render::plane::{PixelPlane, PlaneBlit};

const PLANE: Rect = Rect::new(0, 0, 24, 18);

fn dest_rect() -> impl Strategy<Value = Rect> {
    (-4i32..28, -4i32..22, 0i32..20, 0i32..20)
        .prop_map(|(x, y, w, h)| Rect::from_origin_size(x, y, w, h))
}

proptest! {
    #[test]
    fn move_matches_snapshot_copy(dest in dest_rect(), dx in -10i32..10, dy in -10i32..10) {
        let before = PixelPlane::from_fn(PLANE, |x, y| (y * 64 + x) as u32 + 1);
        let mut plane = before.clone();
        let offset = Point::new(dx, dy);
        plane.move_rect(dest, offset);

        for y in PLANE.y0..PLANE.y1 {
            for x in PLANE.x0..PLANE.x1 {
                let src = before.get(x - dx, y - dy);
                let expected = match src {
                    Some(v) if dest.contains(x, y) => Some(v),
                    _ => before.get(x, y),
                };
                prop_assert_eq!(plane.get(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }
}
