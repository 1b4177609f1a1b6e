use crate::matrix::augmented::{AugmentedMatrix, Scalar};
use crate::matrix::matrix::Matrix;

/// True iff some entry of `column` at or below `start_row` is non-zero.
pub fn has_pivot<T: Scalar>(m: &AugmentedMatrix<T>, column: usize, start_row: usize) -> bool {
    (start_row..m.rows)
        .map(|r| m.at(r, column).abs())
        .fold(T::zero(), |acc, x| acc + x)
        != T::zero()
}

/// Row in `start_row..` holding the largest absolute value of `column`.
///
/// Ties keep the lowest row, so a diagonal entry is never swapped away for an
/// equal one below it. Callers must check [`has_pivot`] first.
pub fn select_pivot<T: Scalar>(m: &AugmentedMatrix<T>, column: usize, start_row: usize) -> usize {
    let mut best = start_row;
    let mut best_value = m.at(start_row, column).abs();

    for r in start_row + 1..m.rows {
        let value = m.at(r, column).abs();
        if value > best_value {
            best = r;
            best_value = value;
        }
    }
    best
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_pivot() {
        let m = AugmentedMatrix::new(
            vec![vec![5.0, 0.0], vec![0.0, 0.0], vec![0.0, -2.0]],
            None,
        )
        .unwrap();
        assert!(has_pivot(&m, 0, 0));
        assert!(!has_pivot(&m, 0, 1));
        assert!(has_pivot(&m, 1, 0));
        assert!(has_pivot(&m, 1, 2));
        // Negative entries must not cancel positive ones
        let m = AugmentedMatrix::new(vec![vec![1.0], vec![-1.0]], None).unwrap();
        assert!(has_pivot(&m, 0, 0));
    }

    #[test]
    fn test_select_pivot_max_abs() {
        let m = AugmentedMatrix::new(vec![vec![1.0], vec![-7.0], vec![3.0]], None).unwrap();
        assert_eq!(select_pivot(&m, 0, 0), 1);
        assert_eq!(select_pivot(&m, 0, 2), 2);
    }

    #[test]
    fn test_select_pivot_ties_keep_lowest_row() {
        let m = AugmentedMatrix::new(vec![vec![2.0], vec![-2.0], vec![2.0]], None).unwrap();
        assert_eq!(select_pivot(&m, 0, 0), 0);

        let m = AugmentedMatrix::new(vec![vec![9.0], vec![0.0], vec![-4.0], vec![4.0]], None)
            .unwrap();
        assert_eq!(select_pivot(&m, 0, 1), 2);
    }

    #[test]
    fn test_select_pivot_skips_zero_diagonal() {
        let m = AugmentedMatrix::new(vec![vec![0.0, 2.0], vec![1.0, 1.0]], None).unwrap();
        assert!(has_pivot(&m, 0, 0));
        assert_eq!(select_pivot(&m, 0, 0), 1);
    }
}
