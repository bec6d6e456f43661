#![forbid(unsafe_code)]

//! Core: geometry, rectangle algebra, and window handles.
//!
//! # Role in stratum
//! `stratum-core` holds the value types every other crate speaks in:
//! [`geometry::Rect`], [`geometry::Point`] and [`id::WindowId`]. It has no
//! state and no I/O.
//!
//! # Primary responsibilities
//! - **Rect algebra**: offset, intersect, union, and the four-band
//!   `nonintersecting` decomposition used by clipping.
//! - **Handles**: stable window identifiers shared between the window table
//!   and redraw sinks.
//! - **Logging**: the log filter variable and an optional JSON subscriber.

pub mod geometry;
pub mod id;
pub mod logging;

pub use geometry::{Band, Point, Rect};
pub use id::WindowId;
