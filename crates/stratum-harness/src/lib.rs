#![forbid(unsafe_code)]

//! Test harness and reference fixtures for stratum.
//!
//! - [`reference`]: order-independent pixel model of a region move.
//! - [`recorder`]: recording `PlaneBlit` and `ClipVisitor` implementations.
//! - [`scene`]: seeded window-stack generation.
//! - [`frame_checksum`]: stable hash of a plane for determinism checks.

pub mod recorder;
pub mod reference;
pub mod scene;

use stratum_render::plane::PixelPlane;

pub use recorder::{ClipRecorder, RecordingPlane};
pub use reference::{ExpectedMove, Mismatch, PixelSet, compare, expected_move, pixels_of, total_area};
pub use scene::{Lcg, Scene};

/// BLAKE3 hex digest of a plane's bounds and pixels.
pub fn frame_checksum(plane: &PixelPlane) -> String {
    let mut hasher = blake3::Hasher::new();
    let b = plane.bounds();
    for v in [b.x0, b.y0, b.x1, b.y1] {
        hasher.update(&v.to_le_bytes());
    }
    for px in plane.pixels() {
        hasher.update(&px.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_core::geometry::Rect;

    #[test]
    fn checksum_tracks_content() {
        let a = PixelPlane::new(Rect::new(0, 0, 4, 4));
        let mut b = a.clone();
        assert_eq!(frame_checksum(&a), frame_checksum(&b));
        b.set(1, 1, 5);
        assert_ne!(frame_checksum(&a), frame_checksum(&b));
    }

    #[test]
    fn scenes_are_reproducible() {
        let a = Scene::generate(42, 64, 48, 5);
        let b = Scene::generate(42, 64, 48, 5);
        assert_eq!(a.stack.z_order(), b.stack.z_order());
        assert_eq!(a.stack.get(a.target), b.stack.get(b.target));
        assert_eq!(a.stack.above(a.target).unwrap().len(), 5);
    }
}
