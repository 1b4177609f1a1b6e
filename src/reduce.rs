//! Gauss–Jordan elimination with partial pivoting, recorded step by step.
//!
//! Columns are visited left to right and each column `c` uses row `c` as its
//! pivot row. A column with nothing non-zero at or below the diagonal is
//! skipped without producing a step.

use log::debug;
use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::latex::document::write_document;
use crate::matrix::augmented::{AugmentedMatrix, Scalar};
use crate::matrix::matrix::Matrix;
use crate::matrix::pivot::{has_pivot, select_pivot};
use crate::steps::recorder::StepRecorder;
use crate::steps::step::Trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning(usize),
    Pivoting(usize),
    Normalizing(usize),
    Eliminating(usize),
    Done,
}

/// Reduces `matrix` in place and returns every recorded step.
pub fn reduce_matrix<T: Scalar>(matrix: &mut AugmentedMatrix<T>, config: &Config) -> Result<Trace<T>> {
    let mut recorder = StepRecorder::new(matrix, config.show_all_steps);
    let mut pivot_columns = vec![];
    let last_column = matrix.rows.min(matrix.cols);

    let mut state = State::Scanning(0);
    loop {
        state = match state {
            State::Scanning(c) if c >= last_column => State::Done,
            State::Scanning(c) => {
                if has_pivot(matrix, c, c) {
                    State::Pivoting(c)
                } else {
                    debug!("column {} has no pivot, skipped", c);
                    State::Scanning(c + 1)
                }
            }
            State::Pivoting(c) => {
                let idx = select_pivot(matrix, c, c);
                debug!("column {}: pivot row {}", c, idx);
                recorder.swap(matrix, c, idx);
                State::Normalizing(c)
            }
            State::Normalizing(c) => {
                recorder.normalize(matrix, c)?;
                pivot_columns.push(c);
                State::Eliminating(c)
            }
            State::Eliminating(c) => {
                for j in 0..matrix.rows {
                    if j != c && !matrix.row(j)[c].is_zero() {
                        recorder.eliminate(matrix, c, j)?;
                    }
                }
                recorder.finish_column(matrix);
                State::Scanning(c + 1)
            }
            State::Done => break,
        };
    }

    let trace = Trace {
        steps: recorder.into_steps(),
        pivot_columns,
    };
    if !trace.is_reduced() {
        debug!(
            "stopped short of reduced row echelon form: {:?}",
            matrix.to_list()
        );
    }
    Ok(trace)
}

/// Reduces `[a | b]` to reduced row echelon form.
///
/// `b` is optional; when given it must have as many rows as `a`, which is
/// checked before anything is recorded.
pub fn reduce<T: Scalar>(
    a: Vec<Vec<T>>,
    b: Option<Vec<Vec<T>>>,
    config: &Config,
) -> Result<Trace<T>> {
    let mut matrix = AugmentedMatrix::new(a, b)?;
    reduce_matrix(&mut matrix, config)
}

/// Like [`reduce`], then writes the derivation document to `sink`.
/// Nothing is written when the input is rejected.
pub fn reduce_into<T: Scalar, W: Write>(
    a: Vec<Vec<T>>,
    b: Option<Vec<Vec<T>>>,
    sink: &mut W,
    config: &Config,
) -> Result<Trace<T>> {
    let trace = reduce(a, b, config)?;
    write_document(&trace, config, sink)?;
    Ok(trace)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
