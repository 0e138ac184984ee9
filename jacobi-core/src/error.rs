use thiserror::Error;

pub type Result<T> = std::result::Result<T, JacobiError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JacobiError {
    /// A grid needs at least one row and one column.
    #[error("invalid grid dimensions N={n} M={m}: both must be >= 1")]
    InvalidDimensions { n: usize, m: usize },

    /// `n * m` cells of the requested precision exceed `isize::MAX` bytes.
    #[error("grid dimensions N={n} M={m} are too large to allocate")]
    GridTooLarge { n: usize, m: usize },

    /// Input or output slice does not hold exactly `n * m` cells.
    #[error("buffer size mismatch: expected {expected} cells, input has {input}, output has {output}")]
    BufferSize {
        expected: usize,
        input: usize,
        output: usize,
    },
}
