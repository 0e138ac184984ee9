//! One-step 2D Jacobi relaxation and a double-buffered driver around it.
//!
//! Grids are flat row-major buffers: cell `(i, j)` of an `n x m` grid lives
//! at index `i * m + j`. Border cells are copied through unchanged, interior
//! cells become the mean of their four orthogonal neighbours.

mod driver;
mod error;
mod grid;
mod kernel;
mod metrics;

pub use driver::{Jacobi, Report};
pub use error::{JacobiError, Result};
pub use grid::{Cell, grid_len, init_top_edge};
pub use kernel::jacobi2d;
pub use metrics::{checksum, relative_l2_error};
