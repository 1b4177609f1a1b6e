//! Gauss–Jordan reduction to reduced row echelon form, with a LaTeX
//! derivation of every elementary row operation.
//!
//! ```
//! use rref_steps::{reduce, render_document, Config};
//!
//! let config = Config::new();
//! let trace = reduce(vec![vec![4.0, 3.0], vec![6.0, 3.0]], None, &config).unwrap();
//! let latex = render_document(&trace, &config);
//! assert!(latex.contains("\\text{Original Matrix}"));
//! ```

pub mod latex {
    pub mod document;
    pub mod format;
}
pub mod matrix {
    pub mod augmented;
    pub mod matrix;
    pub mod pivot;
    pub mod row_ops;
}
pub mod steps {
    pub mod recorder;
    pub mod step;
}

pub mod config;
pub mod error;
pub mod reduce;

#[cfg(feature = "python")]
pub mod python;

pub use config::Config;
pub use error::ReduceError;
pub use latex::document::{render_document, write_document};
pub use latex::format::{Notation, NumberFormat};
pub use matrix::augmented::{AugmentedMatrix, Scalar};
pub use matrix::matrix::Matrix;
pub use reduce::{reduce, reduce_into, reduce_matrix};
pub use steps::step::{Elimination, Operation, Step, Trace};
