use crate::error::{JacobiError, Result};
use crate::grid::Cell;

/// Sum of all cells, accumulated in double precision.
pub fn checksum<T: Cell>(field: &[T]) -> f64 {
    let mut sum = 0.0f64;
    for &v in field {
        sum += v.to_f64();
    }
    sum
}

/// `||field - reference||_2 / ||reference||_2`, or 0 when the reference is
/// all zeros.
pub fn relative_l2_error<T: Cell>(field: &[T], reference: &[f64]) -> Result<f64> {
    if field.len() != reference.len() {
        return Err(JacobiError::BufferSize {
            expected: reference.len(),
            input: field.len(),
            output: reference.len(),
        });
    }
    let mut diff2 = 0.0f64;
    let mut ref2 = 0.0f64;
    for (&v, &r) in field.iter().zip(reference) {
        let d = v.to_f64() - r;
        diff2 += d * d;
        ref2 += r * r;
    }
    if ref2 > 0.0 {
        Ok((diff2 / ref2).sqrt())
    } else {
        Ok(0.0)
    }
}
