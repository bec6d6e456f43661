#![forbid(unsafe_code)]

//! Window table, occlusion clipping, and region moves.
//!
//! # Role in stratum
//! `stratum-server` owns the window stack and the operations that depend on
//! z-order. Its centerpiece is [`RegionMover`], which scrolls a rectangle of
//! a window's contents while respecting windows stacked above it.
//!
//! # Primary responsibilities
//! - **[`WindowStack`]**: server-owned window table with z-order.
//! - **[`clip()`]**: partition a rectangle into visible and obscured pieces
//!   against the windows above some window.
//! - **[`RegionMover`]**: plan and execute region moves, copying through
//!   [`stratum_render::PlaneBlit`] and scheduling repaint through
//!   [`stratum_render::RedrawSink`].
//!
//! # Concurrency
//! Everything here is synchronous. A move borrows the stack immutably for
//! its whole duration, so z-order and geometry cannot change underneath it.

pub mod clip;
pub mod config;
pub mod error;
pub mod mover;
pub mod window;

pub use clip::{ClipOrder, ClipVisitor, clip};
pub use config::{ConfigError, MoverConfig};
pub use error::ServerError;
pub use mover::{MoveOp, MovePlan, RegionMover};
pub use window::{Window, WindowFlags, WindowStack, ZChain};
