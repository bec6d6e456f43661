//! Property-based invariant tests for occlusion clipping.
//!
//! 1. Reported pieces partition the input: same pixels, no double counting.
//! 2. Visible pieces avoid every visible occluder.
//! 3. Obscured pieces lie inside some visible occluder.
//! 4. The visible pixel set does not depend on the traversal order.

use proptest::prelude::*;
use stratum_core::geometry::Rect;
use stratum_harness::{ClipRecorder, pixels_of, total_area};
use stratum_server::{ClipOrder, Window, WindowFlags, WindowStack, clip};

// ── Helpers ─────────────────────────────────────────────────────────────

const SCREEN: Rect = Rect::new(0, 0, 40, 30);

fn window_rect() -> impl Strategy<Value = Rect> {
    (-8i32..40, -8i32..30, 1i32..20, 1i32..20)
        .prop_map(|(x, y, w, h)| Rect::from_origin_size(x, y, w, h))
}

fn query_rect() -> impl Strategy<Value = Rect> {
    (-5i32..40, -5i32..30, 0i32..25, 0i32..25)
        .prop_map(|(x, y, w, h)| Rect::from_origin_size(x, y, w, h))
}

fn occluders() -> impl Strategy<Value = Vec<(Rect, bool)>> {
    prop::collection::vec((window_rect(), prop::bool::weighted(0.2)), 0..6)
}

fn build(above: &[(Rect, bool)]) -> (WindowStack, stratum_core::id::WindowId) {
    let mut stack = WindowStack::new(SCREEN);
    let base = stack.insert(Window::new(SCREEN));
    for &(bounds, hidden) in above {
        let flags = if hidden { WindowFlags::HIDDEN } else { WindowFlags::empty() };
        stack.insert(Window::new(bounds).with_flags(flags));
    }
    (stack, base)
}

fn visible_occluders(above: &[(Rect, bool)]) -> Vec<Rect> {
    above.iter().filter(|(_, hidden)| !hidden).map(|(r, _)| *r).collect()
}

fn run(stack: &WindowStack, base: stratum_core::id::WindowId, rect: Rect, order: ClipOrder) -> ClipRecorder {
    let mut rec = ClipRecorder::default();
    clip(stack.above(base).unwrap(), rect, order, &mut rec);
    rec
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Partition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pieces_partition_input(above in occluders(), rect in query_rect(), order_idx in 0usize..4) {
        let (stack, base) = build(&above);
        let rec = run(&stack, base, rect, ClipOrder::ALL[order_idx]);

        prop_assert_eq!(total_area(rec.all()), rect.area());
        prop_assert_eq!(pixels_of(rec.all()), pixels_of([&rect]));
        for piece in rec.all() {
            prop_assert!(!piece.is_empty(), "empty piece reported");
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2-3. Classification
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn visible_pieces_avoid_occluders(above in occluders(), rect in query_rect()) {
        let (stack, base) = build(&above);
        let rec = run(&stack, base, rect, ClipOrder::TopLeftFirst);
        let occ = visible_occluders(&above);

        for piece in &rec.visible {
            for o in &occ {
                prop_assert!(!piece.intersects(o), "visible {} overlaps occluder {}", piece, o);
            }
        }
    }

    #[test]
    fn obscured_pieces_are_covered(above in occluders(), rect in query_rect()) {
        let (stack, base) = build(&above);
        let rec = run(&stack, base, rect, ClipOrder::BottomRightFirst);
        let occ = visible_occluders(&above);

        for piece in &rec.obscured {
            prop_assert!(
                occ.iter().any(|o| o.contains_rect(piece)),
                "obscured {} not inside any occluder", piece
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Order independence of the classification
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn visible_area_is_order_independent(above in occluders(), rect in query_rect()) {
        let (stack, base) = build(&above);
        let reference = pixels_of(&run(&stack, base, rect, ClipOrder::TopLeftFirst).visible);
        for order in ClipOrder::ALL {
            let rec = run(&stack, base, rect, order);
            prop_assert_eq!(&pixels_of(&rec.visible), &reference, "order {:?}", order);
        }
    }
}
