//! Benchmark utilities for flatscaler-rs.
//!
//! Provides deterministic synthetic data so benchmark runs are comparable.

use ndarray::Array2;

/// A `rows x cols` matrix of smoothly varying values with a few spikes.
pub fn synthetic_matrix(rows: usize, cols: usize, seed: u64) -> Array2<f64> {
    let mut state = seed;
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        // LCG noise in [0, 1)
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let noise = ((state >> 33) as f64) / (u32::MAX as f64);
        let base = 100.0 + 1.5 * r as f64 + 20.0 * (c as f64 * 0.1).sin();
        if noise > 0.999 {
            base * 10.0
        } else {
            base + noise
        }
    })
}

/// `count` matrices of the given shape, each with its own seed.
pub fn synthetic_splits(count: usize, rows: usize, cols: usize) -> Vec<Array2<f64>> {
    (0..count)
        .map(|i| synthetic_matrix(rows, cols, 42 + i as u64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_matrix_is_deterministic() {
        assert_eq!(synthetic_matrix(4, 3, 7), synthetic_matrix(4, 3, 7));
        assert_ne!(synthetic_matrix(4, 3, 7), synthetic_matrix(4, 3, 8));
    }

    #[test]
    fn test_synthetic_splits_shape() {
        let splits = synthetic_splits(3, 10, 2);
        assert_eq!(splits.len(), 3);
        assert!(splits.iter().all(|m| m.dim() == (10, 2)));
    }
}
