#![forbid(unsafe_code)]

//! Render side of the window server: display planes and redraw sinks.
//!
//! # Role in stratum
//! The move engine in `stratum-server` never touches pixels or windows'
//! paint logic directly. It talks to two seams defined here:
//!
//! - **[`PlaneBlit`]**: overlap-safe pixel relocation within one plane.
//! - **[`RedrawSink`]**: requests that a window repaint a rectangle.
//!
//! [`PixelPlane`] and [`RedrawQueue`] are the stock implementations.

pub mod plane;
pub mod redraw;

pub use plane::{PixelPlane, PlaneBlit};
pub use redraw::{DEFAULT_REDRAW_LIMIT, RedrawQueue, RedrawSink};
