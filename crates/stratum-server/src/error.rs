#![forbid(unsafe_code)]

//! Errors raised at the server boundary.
//!
//! The move itself cannot fail; these only reject calls whose arguments the
//! window table cannot honor.

use std::fmt;

use stratum_core::id::WindowId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// The handle does not name a window in this table.
    UnknownWindow(WindowId),
    /// More display planes were supplied than the mover is configured for.
    PlaneLimit { requested: usize, limit: usize },
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWindow(id) => write!(f, "unknown window {id}"),
            Self::PlaneLimit { requested, limit } => {
                write!(f, "{requested} planes supplied, limit is {limit}")
            }
        }
    }
}

impl std::error::Error for ServerError {}
