use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::Config;
use crate::error::ReduceError;
use crate::latex::document::render_document;
use crate::latex::format::NumberFormat;
use crate::reduce::reduce;

impl From<ReduceError> for PyErr {
    fn from(error: ReduceError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

/// Reduces `[a | b]` and returns the LaTeX derivation.
#[pyfunction]
#[pyo3(signature = (a, b=None, show_all_steps=false, number_format=".3f"))]
pub fn rref_latex(
    a: Vec<Vec<f64>>,
    b: Option<Vec<Vec<f64>>>,
    show_all_steps: bool,
    number_format: &str,
) -> PyResult<String> {
    let config = Config::new()
        .with_all_steps(show_all_steps)
        .with_number_format(number_format.parse::<NumberFormat>()?);
    let trace = reduce(a, b, &config)?;
    Ok(render_document(&trace, &config))
}

/// Reduces `[a | b]` and returns the reduced `a` and `b` blocks.
#[pyfunction]
#[pyo3(signature = (a, b=None))]
pub fn rref(
    a: Vec<Vec<f64>>,
    b: Option<Vec<Vec<f64>>>,
) -> PyResult<(Vec<Vec<f64>>, Option<Vec<Vec<f64>>>)> {
    let trace = reduce(a, b, &Config::new())?;
    match trace.final_matrix() {
        Some(m) => Ok((m.coefficients(), m.augmentation())),
        None => Err(PyValueError::new_err("Empty trace")),
    }
}

/// A Python module implemented in Rust.
#[pymodule]
fn rref_steps(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rref_latex, m)?)?;
    m.add_function(wrap_pyfunction!(rref, m)?)?;
    Ok(())
}
