#![no_main]

use libfuzzer_sys::fuzz_target;
use stratum_core::geometry::Rect;
use stratum_harness::{ClipRecorder, pixels_of, total_area};
use stratum_server::{ClipOrder, Window, WindowStack, clip};

fn rect_from(bytes: &[u8]) -> Rect {
    let v = |i: usize| i32::from(bytes[i] as i8);
    Rect::from_origin_size(v(0), v(1), i32::from(bytes[2] % 96), i32::from(bytes[3] % 96))
}

fuzz_target!(|data: &[u8]| {
    // Byte 0 picks the order, the next 4 bytes the query, then 4 bytes per occluder.
    if data.len() < 5 {
        return;
    }
    let order = ClipOrder::ALL[usize::from(data[0] % 4)];
    let rect = rect_from(&data[1..5]);

    let mut stack = WindowStack::new(Rect::new(-128, -128, 128, 128));
    let base = stack.insert(Window::new(Rect::new(-128, -128, 128, 128)));
    for chunk in data[5..].chunks_exact(4).take(12) {
        let bounds = rect_from(chunk);
        if !bounds.is_empty() {
            stack.insert(Window::new(bounds));
        }
    }

    let mut rec = ClipRecorder::default();
    clip(stack.above(base).expect("base is in the stack"), rect, order, &mut rec);

    assert_eq!(total_area(rec.all()), rect.area(), "pieces overlap or leak");
    assert_eq!(pixels_of(rec.all()), pixels_of([&rect]), "pieces miss pixels");
});
