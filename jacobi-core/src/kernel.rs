use crate::error::{JacobiError, Result};
use crate::grid::{Cell, grid_len};

/// One Jacobi relaxation pass from `input` into `output`.
///
/// Border cells (row 0, row `n - 1`, column 0, column `m - 1`) are copied
/// through. Every interior cell becomes
/// `0.25 * (up + down + left + right)` read from `input`. With `n <= 2` or
/// `m <= 2` every cell is a border cell and the pass is a plain copy.
///
/// The scan is row-major with unit stride. Nothing is written when the
/// dimensions or buffer lengths are rejected.
pub fn jacobi2d<T: Cell>(input: &[T], output: &mut [T], n: usize, m: usize) -> Result<()> {
    let len = grid_len::<T>(n, m)?;
    if input.len() != len || output.len() != len {
        return Err(JacobiError::BufferSize {
            expected: len,
            input: input.len(),
            output: output.len(),
        });
    }

    for i in 0..n {
        let row = i * m;
        for j in 0..m {
            let idx = row + j;
            if i == 0 || j == 0 || i == n - 1 || j == m - 1 {
                output[idx] = input[idx];
            } else {
                let up = input[idx - m];
                let down = input[idx + m];
                let left = input[idx - 1];
                let right = input[idx + 1];
                output[idx] = T::QUARTER * (up + down + left + right);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::init_top_edge;
    use float_cmp::{approx_eq, assert_approx_eq};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_grid(rng: &mut ChaCha8Rng, n: usize, m: usize) -> Vec<f32> {
        (0..n * m).map(|_| rng.gen_range(-10.0..10.0)).collect()
    }

    fn is_border(i: usize, j: usize, n: usize, m: usize) -> bool {
        i == 0 || j == 0 || i == n - 1 || j == m - 1
    }

    #[test]
    fn borders_are_copied_through() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..64 {
            let n = rng.gen_range(1..16);
            let m = rng.gen_range(1..16);
            let input = random_grid(&mut rng, n, m);
            let mut output = vec![f32::NAN; n * m];
            jacobi2d(&input, &mut output, n, m).unwrap();

            for i in 0..n {
                for j in 0..m {
                    if is_border(i, j, n, m) {
                        assert_eq!(output[i * m + j], input[i * m + j], "cell ({i},{j}) of {n}x{m}");
                    }
                }
            }
        }
    }

    #[test]
    fn interior_is_mean_of_neighbours() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..64 {
            let n = rng.gen_range(3..20);
            let m = rng.gen_range(3..20);
            let input = random_grid(&mut rng, n, m);
            let mut output = vec![0.0f32; n * m];
            jacobi2d(&input, &mut output, n, m).unwrap();

            for i in 1..n - 1 {
                for j in 1..m - 1 {
                    let expected = 0.25
                        * (input[(i - 1) * m + j]
                            + input[(i + 1) * m + j]
                            + input[i * m + j - 1]
                            + input[i * m + j + 1]);
                    let got = output[i * m + j];
                    assert!(
                        approx_eq!(f32, got, expected, epsilon = 1e-6 * expected.abs().max(1.0)),
                        "cell ({i},{j}) of {n}x{m}: got {got}, expected {expected}"
                    );

                    // Independent mean in f64. f32 rounding is bounded by the
                    // neighbour magnitudes, so the tolerance is relative to them.
                    let nbrs = [
                        input[(i - 1) * m + j] as f64,
                        input[(i + 1) * m + j] as f64,
                        input[i * m + j - 1] as f64,
                        input[i * m + j + 1] as f64,
                    ];
                    let exact = nbrs.iter().sum::<f64>() / 4.0;
                    let scale = nbrs.iter().map(|v| v.abs()).sum::<f64>() / 4.0;
                    let got = got as f64;
                    assert!(
                        approx_eq!(f64, got, exact, epsilon = 1e-6 * scale),
                        "cell ({i},{j}) of {n}x{m}: got {got}, f64 mean {exact}"
                    );
                }
            }
        }
    }

    #[test]
    fn interior_matches_f64_mean_to_relative_tolerance() {
        // Dyadic inputs keep every f32 partial sum exact.
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let (n, m) = (17, 13);
        let input: Vec<f32> = (0..n * m)
            .map(|_| rng.gen_range(-4096i32..4096) as f32 / 64.0)
            .collect();
        let mut output = vec![0.0f32; n * m];
        jacobi2d(&input, &mut output, n, m).unwrap();

        for i in 1..n - 1 {
            for j in 1..m - 1 {
                let exact = (input[(i - 1) * m + j] as f64
                    + input[(i + 1) * m + j] as f64
                    + input[i * m + j - 1] as f64
                    + input[i * m + j + 1] as f64)
                    / 4.0;
                let got = output[i * m + j] as f64;
                assert!(
                    (got - exact).abs() <= 1e-6 * exact.abs(),
                    "cell ({i},{j}): got {got}, f64 mean {exact}"
                );
            }
        }
    }

    #[test]
    fn thin_grids_are_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for &(n, m) in &[(1, 1), (1, 9), (9, 1), (2, 2), (2, 7), (7, 2)] {
            let input = random_grid(&mut rng, n, m);
            let mut output = vec![0.0f32; n * m];
            jacobi2d(&input, &mut output, n, m).unwrap();
            assert_eq!(output, input, "{n}x{m}");
        }
    }

    #[test]
    fn constant_field_is_fixed_point() {
        for &c in &[0.0f32, 1.0, -3.5, 0.125] {
            let input = vec![c; 6 * 5];
            let mut output = vec![0.0f32; 6 * 5];
            jacobi2d(&input, &mut output, 6, 5).unwrap();
            assert!(output.iter().all(|&v| v == c));
        }
    }

    #[test]
    fn hot_top_edge_4x4() {
        let (n, m) = (4, 4);
        let mut input = vec![0.0f32; n * m];
        init_top_edge(&mut input, m);
        let mut output = vec![0.0f32; n * m];
        jacobi2d(&input, &mut output, n, m).unwrap();

        assert_approx_eq!(f32, output[m + 1], 0.25);
        assert_approx_eq!(f32, output[m + 2], 0.25);
        assert_approx_eq!(f32, output[2 * m + 1], 0.0);
        assert_approx_eq!(f32, output[2 * m + 2], 0.0);
        for i in 0..n {
            for j in 0..m {
                if is_border(i, j, n, m) {
                    assert_eq!(output[i * m + j], input[i * m + j]);
                }
            }
        }
    }

    #[test]
    fn index_ramp_3x3() {
        let input: Vec<f32> = (0..9).map(|v| v as f32).collect();
        let mut output = vec![0.0f32; 9];
        jacobi2d(&input, &mut output, 3, 3).unwrap();

        let expected = 0.25 * (input[1] + input[7] + input[3] + input[5]);
        assert_approx_eq!(f32, output[4], expected);
        assert_approx_eq!(f32, output[4], 4.0);
    }

    #[test]
    fn works_in_double_precision() {
        let input: Vec<f64> = (0..20).map(|v| (v * v) as f64).collect();
        let mut output = vec![0.0f64; 20];
        jacobi2d(&input, &mut output, 4, 5).unwrap();
        // (1,1): up=1, down=121, left=25, right=49
        assert_approx_eq!(f64, output[6], 49.0);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let input: [f32; 0] = [];
        let mut output: [f32; 0] = [];
        assert_eq!(
            jacobi2d(&input, &mut output, 0, 3),
            Err(JacobiError::InvalidDimensions { n: 0, m: 3 })
        );
        assert_eq!(
            jacobi2d(&input, &mut output, 3, 0),
            Err(JacobiError::InvalidDimensions { n: 3, m: 0 })
        );
    }

    #[test]
    fn rejects_mismatched_buffers_without_writing() {
        let input = vec![1.0f32; 9];
        let mut output = vec![5.0f32; 8];
        assert_eq!(
            jacobi2d(&input, &mut output, 3, 3),
            Err(JacobiError::BufferSize {
                expected: 9,
                input: 9,
                output: 8
            })
        );
        assert!(output.iter().all(|&v| v == 5.0));
    }
}
