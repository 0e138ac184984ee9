use std::fmt;

use tracing::{debug, trace};

use crate::error::Result;
use crate::grid::{Cell, grid_len, init_top_edge};
use crate::kernel::jacobi2d;
use crate::metrics::checksum;

/// Double-buffered Jacobi iteration over an `n x m` grid.
///
/// `field` always holds the current state; each step writes into `next`
/// and then the two buffers trade places.
pub struct Jacobi<T: Cell = f32> {
    n: usize,
    m: usize,
    iterations: usize,
    field: Vec<T>,
    next: Vec<T>,
}

impl<T: Cell> Jacobi<T> {
    /// Allocates both buffers and applies the hot-top-edge initial condition.
    pub fn new(n: usize, m: usize) -> Result<Self> {
        let len = grid_len::<T>(n, m)?;
        debug!(n, m, precision = T::NAME, "allocating jacobi buffers");

        let mut jacobi = Jacobi {
            n,
            m,
            iterations: 0,
            field: vec![T::ZERO; len],
            next: vec![T::ZERO; len],
        };
        jacobi.reset();
        Ok(jacobi)
    }

    pub fn reset(&mut self) {
        init_top_edge(&mut self.field, self.m);
        self.next.copy_from_slice(&self.field);
        self.iterations = 0;
    }

    // ---- Accessors ----
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn m(&self) -> usize {
        self.m
    }

    /// Steps applied since construction or the last `reset`.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn field(&self) -> &[T] {
        &self.field
    }

    pub fn checksum(&self) -> f64 {
        checksum(&self.field)
    }

    pub fn report(&self) -> Report {
        Report {
            n: self.n,
            m: self.m,
            iters: self.iterations,
            checksum: self.checksum(),
        }
    }

    // ---- Iteration ----
    pub fn step(&mut self) -> Result<()> {
        jacobi2d(&self.field, &mut self.next, self.n, self.m)?;
        self.swap_buffers();
        self.iterations += 1;
        trace!(iteration = self.iterations, "jacobi step");
        Ok(())
    }

    pub fn run(&mut self, iters: usize) -> Result<()> {
        for _ in 0..iters {
            self.step()?;
        }
        Ok(())
    }

    fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.field, &mut self.next);
    }
}

/// The testbench's regression line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub n: usize,
    pub m: usize,
    pub iters: usize,
    pub checksum: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HLS csim done: N={} M={} iters={} checksum={:.6}",
            self.n, self.m, self.iters, self.checksum
        )
    }
}
