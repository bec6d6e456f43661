#![forbid(unsafe_code)]

//! Occlusion clipping against a z-order chain.
//!
//! [`clip`] partitions a screen rectangle into disjoint pieces and reports
//! each one to a [`ClipVisitor`]: `visible` when no window of the chain
//! covers it, `obscured` when one does. The pieces cover the input exactly
//! once.
//!
//! # Traversal
//!
//! Work is a LIFO list of `(depth, rect)`. A popped piece is tested against
//! the chain from `depth` upward. The first occluder that touches it splits
//! it: the overlap is reported obscured and the remaining four bands (see
//! [`Rect::nonintersecting`]) are pushed to continue against the windows
//! above the splitter. Bands are pushed in reverse [`ClipOrder`] priority so
//! they pop, and are fully resolved, in priority order.

use smallvec::SmallVec;
use stratum_core::geometry::{Band, Point, Rect};

use crate::window::ZChain;

/// Inline capacity of the clipping work list before it spills to the heap.
pub const CLIP_STACK_INLINE: usize = 16;

/// Receives the pieces of a clipped rectangle.
pub trait ClipVisitor {
    /// A piece not covered by any window in the chain.
    fn visible(&mut self, rect: Rect);
    /// A piece covered by some window in the chain.
    fn obscured(&mut self, rect: Rect);
}

/// Quadrant priority for visiting the bands of a split piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipOrder {
    /// Top band, then left, right, bottom.
    TopLeftFirst,
    /// Top band, then right, left, bottom.
    TopRightFirst,
    /// Bottom band, then left, right, top.
    BottomLeftFirst,
    /// Bottom band, then right, left, top.
    BottomRightFirst,
}

impl ClipOrder {
    pub const ALL: [ClipOrder; 4] = [
        ClipOrder::TopLeftFirst,
        ClipOrder::TopRightFirst,
        ClipOrder::BottomLeftFirst,
        ClipOrder::BottomRightFirst,
    ];

    /// The order that keeps a move of `offset` from overwriting pixels it has
    /// yet to read: pieces lying furthest along the direction of motion go
    /// first.
    pub const fn from_offset(offset: Point) -> Self {
        match (offset.y < 0, offset.x < 0) {
            (true, true) => ClipOrder::TopLeftFirst,
            (true, false) => ClipOrder::TopRightFirst,
            (false, true) => ClipOrder::BottomLeftFirst,
            (false, false) => ClipOrder::BottomRightFirst,
        }
    }

    /// Bands in the order they are visited.
    pub const fn band_priority(self) -> [Band; 4] {
        use Band::{Bottom, Left, Right, Top};
        match self {
            ClipOrder::TopLeftFirst => [Top, Left, Right, Bottom],
            ClipOrder::TopRightFirst => [Top, Right, Left, Bottom],
            ClipOrder::BottomLeftFirst => [Bottom, Left, Right, Top],
            ClipOrder::BottomRightFirst => [Bottom, Right, Left, Top],
        }
    }
}

/// Partition `rect` against `chain`, reporting every piece to `visitor`.
///
/// Empty rectangles produce no callbacks.
pub fn clip<V: ClipVisitor + ?Sized>(chain: ZChain<'_>, rect: Rect, order: ClipOrder, visitor: &mut V) {
    if rect.is_empty() {
        return;
    }

    let mut work: SmallVec<[(usize, Rect); CLIP_STACK_INLINE]> = SmallVec::new();
    work.push((0, rect));

    while let Some((start, piece)) = work.pop() {
        let hit = (start..chain.len()).find_map(|depth| {
            let overlap = piece.intersection_opt(&chain.occluder(depth)?)?;
            Some((depth, overlap))
        });

        let Some((depth, overlap)) = hit else {
            visitor.visible(piece);
            continue;
        };

        visitor.obscured(overlap);
        let bands = piece.nonintersecting(&overlap);
        for band in order.band_priority().into_iter().rev() {
            let band_rect = bands[band.index()];
            if !band_rect.is_empty() {
                work.push((depth + 1, band_rect));
            }
        }
    }
}
