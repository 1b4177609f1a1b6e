use crate::matrix::augmented::{AugmentedMatrix, Scalar};
use crate::matrix::matrix::Matrix;

/// One `target = target - scale * pivot` row operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Elimination<T> {
    pub target: usize,
    pub pivot: usize,
    pub scale: T,
}

/// What produced a step. Row indices are zero-based.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation<T> {
    Original,
    Swap { first: usize, second: usize },
    Normalize { row: usize, scale: T },
    /// One or more eliminations against the same pivot row, in ascending
    /// target order. Holds a single entry when every step is shown.
    Eliminate(Vec<Elimination<T>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    /// The matrix after `operation` was applied.
    pub snapshot: AugmentedMatrix<T>,
    pub operation: Operation<T>,
}

/// Ordered steps of a single reduction, starting with the original matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<T> {
    pub steps: Vec<Step<T>>,
    /// Columns that received a pivot, left to right.
    pub pivot_columns: Vec<usize>,
}

impl<T> Trace<T> {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<T>> {
        self.steps.iter()
    }

    /// The reduced matrix, i.e. the snapshot of the last step.
    pub fn final_matrix(&self) -> Option<&AugmentedMatrix<T>> {
        self.steps.last().map(|s| &s.snapshot)
    }

    pub fn rank(&self) -> usize {
        self.pivot_columns.len()
    }
}

impl<T: Scalar> Trace<T> {
    /// Whether the coefficient block ended up in reduced row echelon form.
    ///
    /// Pivots always sit on the diagonal, so a skipped column can leave a
    /// zero row above a pivot row and this returns false.
    pub fn is_reduced(&self) -> bool {
        self.final_matrix().is_some_and(|m| m.is_rref())
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Step<T>;
    type IntoIter = std::slice::Iter<'a, Step<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
