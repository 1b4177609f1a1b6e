//! Elementary row operations on `[A | b]`.
//!
//! Each operation rewrites whole stored rows, so the right-hand side always
//! receives the same scalar and row indices as the coefficient block.

use log::trace;

use crate::error::{ReduceError, Result};
use crate::matrix::augmented::{AugmentedMatrix, Scalar};
use crate::matrix::matrix::Matrix;

/// Scales `row` so that its diagonal entry becomes one and returns the scale.
pub fn normalize_pivot<T: Scalar>(m: &mut AugmentedMatrix<T>, row: usize) -> Result<T> {
    let pivot = m.at(row, row);
    if pivot.is_zero() {
        return Err(ReduceError::ZeroPivot { row });
    }

    let scale = pivot.recip();
    for x in m.row_mut(row).iter_mut() {
        *x = *x * scale;
    }
    // `p * (1 / p)` can land one ulp away from one
    let stride = m.stride();
    m.cells[row * stride + row] = T::one();

    trace!("row {} scaled by {}", row, scale);
    Ok(scale)
}

/// Subtracts `scale * pivot_row` from `target_row`, where `scale` cancels the
/// target's entry in the pivot column. Returns `scale`.
pub fn eliminate_row<T: Scalar>(
    m: &mut AugmentedMatrix<T>,
    pivot_row: usize,
    target_row: usize,
) -> Result<T> {
    if pivot_row == target_row {
        return Err(ReduceError::SelfReduce { row: pivot_row });
    }
    let pivot = m.at(pivot_row, pivot_row);
    if pivot.is_zero() {
        return Err(ReduceError::ZeroPivot { row: pivot_row });
    }

    let scale = m.at(target_row, pivot_row) / pivot;
    let stride = m.stride();
    for k in 0..stride {
        let p = m.cells[pivot_row * stride + k];
        let t = &mut m.cells[target_row * stride + k];
        *t = *t - scale * p;
    }
    m.cells[target_row * stride + pivot_row] = T::zero();

    trace!("row {} -= {} * row {}", target_row, scale, pivot_row);
    Ok(scale)
}

pub fn swap_rows<T: Scalar>(m: &mut AugmentedMatrix<T>, i: usize, j: usize) {
    if i == j {
        return;
    }
    let stride = m.stride();
    for k in 0..stride {
        m.cells.swap(i * stride + k, j * stride + k);
    }
    trace!("rows {} and {} swapped", i, j);
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
