#![forbid(unsafe_code)]

//! Geometric primitives and rectangle algebra.
//!
//! All coordinates are signed screen (or window-local) pixels. Rectangles are
//! half-open: `x0`/`y0` are inclusive, `x1`/`y1` exclusive. A rectangle whose
//! right or bottom edge does not lie past its left or top edge is empty;
//! [`Rect::EMPTY`] is the canonical empty value.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// An integer vector: a position or a move offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The zero vector.
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True for the zero vector.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four pieces produced by [`Rect::nonintersecting`].
///
/// The discriminant is the piece's index in the returned array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Band {
    /// Full-width strip above the overlap.
    Top = 0,
    /// Strip left of the overlap, spanning the overlap's rows.
    Left = 1,
    /// Strip right of the overlap, spanning the overlap's rows.
    Right = 2,
    /// Full-width strip below the overlap.
    Bottom = 3,
}

impl Band {
    /// All bands in index order.
    pub const ALL: [Band; 4] = [Band::Top, Band::Left, Band::Right, Band::Bottom];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// An axis-aligned rectangle, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x0: i32,
    /// Top edge (inclusive).
    pub y0: i32,
    /// Right edge (exclusive).
    pub x1: i32,
    /// Bottom edge (exclusive).
    pub y1: i32,
}

impl Rect {
    /// The canonical empty rectangle.
    pub const EMPTY: Rect = Rect {
        x0: 0,
        y0: 0,
        x1: 0,
        y1: 0,
    };

    /// Create a rectangle from its corners.
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// Width in pixels (zero for empty or malformed rectangles).
    #[inline]
    pub const fn width(&self) -> i32 {
        if self.x1 > self.x0 {
            self.x1.saturating_sub(self.x0)
        } else {
            0
        }
    }

    /// Height in pixels (zero for empty or malformed rectangles).
    #[inline]
    pub const fn height(&self) -> i32 {
        if self.y1 > self.y0 {
            self.y1.saturating_sub(self.y0)
        } else {
            0
        }
    }

    /// Area in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check if the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Check if `other` lies entirely inside this rectangle.
    ///
    /// An empty rectangle is contained by everything.
    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (other.x0 >= self.x0
                && other.y0 >= self.y0
                && other.x1 <= self.x1
                && other.y1 <= self.y1)
    }

    /// Translate by `(dx, dy)`, saturating at the `i32` range.
    #[inline]
    pub const fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x0.saturating_add(dx),
            self.y0.saturating_add(dy),
            self.x1.saturating_add(dx),
            self.y1.saturating_add(dy),
        )
    }

    /// Translate by a vector.
    #[inline]
    pub const fn translate(&self, by: Point) -> Rect {
        self.offset(by.x, by.y)
    }

    /// Check whether the two rectangles share at least one pixel.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns [`Rect::EMPTY`] if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or(Rect::EMPTY)
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let r = Rect::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        );
        (!r.is_empty()).then_some(r)
    }

    /// Smallest rectangle containing both. Empty inputs are ignored.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return if other.is_empty() { Rect::EMPTY } else { *other };
        }
        if other.is_empty() {
            return *self;
        }
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Decompose the part of `self` not covered by `other` into up to four
    /// disjoint rectangles, indexed by [`Band`].
    ///
    /// When the two don't overlap the whole of `self` lands in the
    /// [`Band::Top`] slot. Unused slots hold [`Rect::EMPTY`]. The non-empty
    /// results together with `self ∩ other` partition `self` exactly.
    pub fn nonintersecting(&self, other: &Rect) -> [Rect; 4] {
        let mut out = [Rect::EMPTY; 4];
        if self.is_empty() {
            return out;
        }
        let Some(overlap) = self.intersection_opt(other) else {
            out[Band::Top.index()] = *self;
            return out;
        };

        let pieces = [
            (Band::Top, Rect::new(self.x0, self.y0, self.x1, overlap.y0)),
            (Band::Left, Rect::new(self.x0, overlap.y0, overlap.x0, overlap.y1)),
            (Band::Right, Rect::new(overlap.x1, overlap.y0, self.x1, overlap.y1)),
            (Band::Bottom, Rect::new(self.x0, overlap.y1, self.x1, self.y1)),
        ];
        for (band, piece) in pieces {
            if !piece.is_empty() {
                out[band.index()] = piece;
            }
        }
        out
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})-({},{})", self.x0, self.y0, self.x1, self.y1)
    }
}
