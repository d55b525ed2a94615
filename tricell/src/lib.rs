//! Two-dimensional Game of Life with an extra inert cell state.
//!
//! A [`Grid`] owns a fixed row-major array of [`Cell`]s and steps them with
//! [`Grid::advance()`]. Each generation is computed from an immutable
//! snapshot of the previous one, so the result doesn't depend on evaluation
//! order or on how the work is split across threads.

mod cell;
mod error;
mod grid;
mod state;

pub use cell::Cell;
pub use error::Error;
pub use glam::{IVec2, UVec2};
pub use grid::{Grid, Schedule, SeedPolicy, DEFAULT_CHUNK_LEN};
pub use state::{CellState, StateCounts};
