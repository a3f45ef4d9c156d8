//! Grid model and mapping
//!
//! The visualization grid: typed [`Cell`]s in row-major order, the
//! [`GridConfig`] that sizes them, and the mapper that projects classified
//! structures onto the grid.

pub mod cell;
pub mod config;
pub mod mapper;

pub use cell::{Cell, CellState};
pub use config::GridConfig;
pub use mapper::{map_to_grid, map_to_grid_with_seed};
