//! Print Layout - Paper sizes and card grid planning
//!
//! This crate decides how a batch of identical cards is arranged on paper:
//! - A registry of supported paper sizes (A4, A3, A5, Letter)
//! - A planner that scores every viable `cols x rows` grid and picks the best
//! - Tunable card proportion and minimum card size
//!
//! # Example
//!
//! ```rust
//! use print_layout::compute_grid;
//!
//! let grid = compute_grid("A4", 6).unwrap();
//! assert_eq!((grid.cols, grid.rows), (2, 3));
//! assert_eq!(grid.sheet_count, 1);
//! ```

mod error;
mod paper;
mod planner;
mod settings;

pub use error::{LayoutError, Result};
pub use paper::{PaperRegistry, PaperSizePreset, PaperSizeSpec, DEFAULT_MARGIN_MM};
pub use planner::{compute_grid, CardCount, GridShape, LayoutPlanner};
pub use settings::{PlannerSettings, MAX_REQUESTED_COUNT_LIMIT};
