use std::fmt::Debug;
use std::io::{self, Write};
use std::ops::{Add, Mul};

use crate::error::{JacobiError, Result};

/// Floating-point cell type a grid can hold.
pub trait Cell: Copy + Debug + PartialEq + Add<Output = Self> + Mul<Output = Self> {
    const ZERO: Self;
    const ONE: Self;
    const QUARTER: Self;
    /// Short precision label, e.g. `"f32"`.
    const NAME: &'static str;

    fn to_f64(self) -> f64;

    fn write_le<W: Write>(self, w: &mut W) -> io::Result<()>;
}

impl Cell for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const QUARTER: Self = 0.25;
    const NAME: &'static str = "f32";

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn write_le<W: Write>(self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.to_le_bytes())
    }
}

impl Cell for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const QUARTER: Self = 0.25;
    const NAME: &'static str = "f64";

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }

    fn write_le<W: Write>(self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.to_le_bytes())
    }
}

/// Number of cells in an `n x m` grid of `T`.
///
/// Rejects empty shapes, and shapes whose byte size cannot be allocated
/// (more than `isize::MAX` bytes).
pub fn grid_len<T: Cell>(n: usize, m: usize) -> Result<usize> {
    if n == 0 || m == 0 {
        return Err(JacobiError::InvalidDimensions { n, m });
    }
    let too_large = JacobiError::GridTooLarge { n, m };
    let len = n.checked_mul(m).ok_or(too_large.clone())?;
    let bytes = len.checked_mul(size_of::<T>()).ok_or(too_large.clone())?;
    if bytes > isize::MAX as usize {
        return Err(too_large);
    }
    Ok(len)
}

/// Fixed Dirichlet condition: row 0 is hot (1.0), everything else is 0.0.
pub fn init_top_edge<T: Cell>(field: &mut [T], m: usize) {
    field.fill(T::ZERO);
    for v in field.iter_mut().take(m) {
        *v = T::ONE;
    }
}
