use log::debug;

use crate::error::Result;
use crate::matrix::augmented::{AugmentedMatrix, Scalar};
use crate::matrix::row_ops::{eliminate_row, normalize_pivot, swap_rows};
use crate::steps::step::{Elimination, Operation, Step};

/// Performs row operations and records the resulting steps.
///
/// With `show_all_steps` unset, eliminations are held back until
/// [`StepRecorder::finish_column`] and reported as one combined step.
#[derive(Debug)]
pub struct StepRecorder<T> {
    show_all_steps: bool,
    steps: Vec<Step<T>>,
    pending: Vec<Elimination<T>>,
}

impl<T: Scalar> StepRecorder<T> {
    /// Starts a recording whose first step is the unmodified `original`.
    pub fn new(original: &AugmentedMatrix<T>, show_all_steps: bool) -> Self {
        StepRecorder {
            show_all_steps,
            steps: vec![Step {
                snapshot: original.clone(),
                operation: Operation::Original,
            }],
            pending: vec![],
        }
    }

    fn record(&mut self, m: &AugmentedMatrix<T>, operation: Operation<T>) {
        debug!("step {}: {:?}", self.steps.len(), operation);
        self.steps.push(Step {
            snapshot: m.clone(),
            operation,
        });
    }

    pub fn swap(&mut self, m: &mut AugmentedMatrix<T>, first: usize, second: usize) {
        if first == second {
            return;
        }
        swap_rows(m, first, second);
        self.record(m, Operation::Swap { first, second });
    }

    pub fn normalize(&mut self, m: &mut AugmentedMatrix<T>, row: usize) -> Result<T> {
        let scale = normalize_pivot(m, row)?;
        if scale != T::one() {
            self.record(m, Operation::Normalize { row, scale });
        }
        Ok(scale)
    }

    pub fn eliminate(
        &mut self,
        m: &mut AugmentedMatrix<T>,
        pivot: usize,
        target: usize,
    ) -> Result<T> {
        let scale = eliminate_row(m, pivot, target)?;
        let elimination = Elimination {
            target,
            pivot,
            scale,
        };

        if self.show_all_steps {
            self.record(m, Operation::Eliminate(vec![elimination]));
        } else {
            self.pending.push(elimination);
        }
        Ok(scale)
    }

    /// Emits the combined elimination step held back for the current column.
    pub fn finish_column(&mut self, m: &AugmentedMatrix<T>) {
        if self.pending.is_empty() {
            return;
        }
        let eliminations = std::mem::take(&mut self.pending);
        self.record(m, Operation::Eliminate(eliminations));
    }

    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
