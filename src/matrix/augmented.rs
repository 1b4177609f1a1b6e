use num_traits::Float;

use crate::error::{ReduceError, Result};
use crate::matrix::matrix::Matrix;

pub trait Scalar:  // Avoid repeating all the traits
    Float
    + std::fmt::Display
    + std::fmt::LowerExp
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
}

impl<T> Scalar for T where
    T: Float
        + std::fmt::Display
        + std::fmt::LowerExp
        + std::fmt::Debug
        + Send
        + Sync
        + 'static
{
}

/// The working matrix `[A | b]`.
///
/// Cells are stored row-major with a stride of `cols + aug_cols`, so a row
/// operation always touches the coefficient part and the right-hand side
/// together. `aug_cols == 0` means there is no right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T> {
    pub rows: usize,
    pub cols: usize,
    pub aug_cols: usize,
    pub cells: Vec<T>,
}

fn check_rectangular<T>(lines: &[Vec<T>]) -> Result<usize> {
    let expected = lines.first().map(|l| l.len()).unwrap_or(0);
    for (row, line) in lines.iter().enumerate() {
        if line.len() != expected {
            return Err(ReduceError::Ragged {
                row,
                expected,
                found: line.len(),
            });
        }
    }
    Ok(expected)
}

impl<T: Scalar> AugmentedMatrix<T> {
    /// Validates `a` (and `b` when given) and concatenates them column-wise.
    pub fn new(a: Vec<Vec<T>>, b: Option<Vec<Vec<T>>>) -> Result<Self> {
        let cols = check_rectangular(&a)?;
        if a.is_empty() || cols == 0 {
            return Err(ReduceError::Empty);
        }

        let b = b.unwrap_or_else(|| vec![vec![]; a.len()]);
        if b.len() != a.len() {
            return Err(ReduceError::DimensionMismatch {
                a_rows: a.len(),
                b_rows: b.len(),
            });
        }
        let aug_cols = check_rectangular(&b)?;

        Ok(AugmentedMatrix {
            rows: a.len(),
            cols,
            aug_cols,
            cells: a
                .into_iter()
                .zip(b)
                .flat_map(|(l, r)| l.into_iter().chain(r))
                .collect(),
        })
    }

    #[inline(always)]
    pub fn stride(&self) -> usize {
        self.cols + self.aug_cols
    }

    pub fn is_augmented(&self) -> bool {
        self.aug_cols > 0
    }

    pub fn row(&self, row: usize) -> &[T] {
        let stride = self.stride();
        &self.cells[row * stride..(row + 1) * stride]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let stride = self.stride();
        &mut self.cells[row * stride..(row + 1) * stride]
    }

    /// The `A` block, row by row.
    pub fn coefficients(&self) -> Vec<Vec<T>> {
        (0..self.rows)
            .map(|r| self.row(r)[..self.cols].to_vec())
            .collect()
    }

    /// The `b` block, row by row, or `None` when the matrix is not augmented.
    pub fn augmentation(&self) -> Option<Vec<Vec<T>>> {
        if !self.is_augmented() {
            return None;
        }
        Some(
            (0..self.rows)
                .map(|r| self.row(r)[self.cols..].to_vec())
                .collect(),
        )
    }
}

impl<T: Scalar> Matrix<T> for AugmentedMatrix<T> {
    fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.stride().max(1))
            .map(|line| line.into())
            .collect()
    }

    // Only the coefficient block is inspected: the right-hand side of a
    // reduced system is arbitrary.
    fn is_rref(&self) -> bool {
        let mut lead = None;

        for i in 0..self.rows {
            let row = &self.row(i)[..self.cols];
            let pivot_col_opt = row.iter().position(|x| !x.is_zero());

            match pivot_col_opt {
                None => {
                    for r in i + 1..self.rows {
                        if self.row(r)[..self.cols].iter().any(|x| !x.is_zero()) {
                            return false;
                        }
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if row[pivot_col] != T::one() {
                        return false;
                    }

                    for r in 0..self.rows {
                        if r != i && !self.at(r, pivot_col).is_zero() {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.stride() + col]
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
