#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stratum_core::geometry::{Point, Rect};
use stratum_core::id::WindowId;
use stratum_harness::{compare, expected_move};
use stratum_render::PixelPlane;
use stratum_server::{RegionMover, Window, WindowFlags, WindowStack};

const SCREEN: Rect = Rect::new(0, 0, 48, 32);

#[derive(Debug, Arbitrary)]
struct Input {
    target: (i8, i8, u8, u8),
    above: Vec<(i8, i8, u8, u8, bool)>,
    rect: (i8, i8, u8, u8),
    offset: (i8, i8),
}

fn small_rect((x, y, w, h): (i8, i8, u8, u8)) -> Rect {
    // Keep everything within a few screens so the reference model stays cheap.
    Rect::from_origin_size(
        i32::from(x) % 64,
        i32::from(y) % 48,
        i32::from(w % 64),
        i32::from(h % 48),
    )
}

fuzz_target!(|input: Input| {
    let mut stack = WindowStack::new(SCREEN);
    let target = small_rect(input.target);
    if target.is_empty() {
        return;
    }
    let id = stack.insert(Window::new(target));
    for &(x, y, w, h, hidden) in input.above.iter().take(8) {
        let bounds = small_rect((x, y, w, h));
        if bounds.is_empty() {
            continue;
        }
        let flags = if hidden { WindowFlags::HIDDEN } else { WindowFlags::empty() };
        stack.insert(Window::new(bounds).with_flags(flags));
    }

    let rect = small_rect(input.rect);
    let offset = Point::new(i32::from(input.offset.0) % 48, i32::from(input.offset.1) % 32);

    let before = PixelPlane::from_fn(SCREEN, |x, y| (y * 64 + x) as u32 + 1);
    let expected = expected_move(&stack, id, rect, offset, &before);

    let mut planes = [before];
    let mut sink: Vec<(WindowId, Rect)> = Vec::new();
    RegionMover::default()
        .move_region(&stack, id, rect, offset, &mut planes, &mut sink)
        .expect("known window, one plane");

    let redraws: Vec<Rect> = sink.iter().map(|&(_, r)| r).collect();
    let mismatches = compare(&expected, &planes[0], &redraws);
    assert!(mismatches.is_empty(), "mismatches: {:?}", &mismatches[..mismatches.len().min(8)]);
});
