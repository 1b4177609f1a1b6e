//! Serializes a [`Trace`] into an `align*` block, one aligned line per step.

use itertools::Itertools;
use log::debug;
use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::latex::format::{annotation, render_matrix, NumberFormat};
use crate::matrix::augmented::Scalar;
use crate::steps::step::{Step, Trace};

/// Lets an equation block break across pages.
pub const PREAMBLE: &str = "\\allowdisplaybreaks";
pub const BEGIN_BLOCK: &str = "\\begin{align*}";
pub const END_BLOCK: &str = "\\end{align*}";

/// The snapshot of `step` followed by its right-aligned justification.
pub fn step_block<T: Scalar>(step: &Step<T>, number_format: &NumberFormat) -> String {
    let lines = annotation(&step.operation, number_format);
    let note = match lines.as_slice() {
        [line] => line.clone(),
        _ => format!(
            "\\begin{{array}}{{l}}\n{}\n\\end{{array}}",
            lines.iter().join(" \\\\\n")
        ),
    };
    format!(
        "& {} && {}",
        render_matrix(&step.snapshot, number_format),
        note
    )
}

/// Text fragments of the whole document, in write order.
pub fn document_fragments<T: Scalar>(trace: &Trace<T>, config: &Config) -> Vec<String> {
    let last = trace.len().saturating_sub(1);

    let mut fragments = Vec::with_capacity(trace.len() + 3);
    fragments.push(PREAMBLE.to_string());
    fragments.push(BEGIN_BLOCK.to_string());
    for (i, step) in trace.iter().enumerate() {
        let mut block = step_block(step, &config.number_format);
        if i != last {
            block.push_str(" \\\\");
        }
        fragments.push(block);
    }
    fragments.push(END_BLOCK.to_string());
    fragments
}

/// Writes the document to `sink`, one fragment per line, then flushes it.
pub fn write_document<T: Scalar, W: Write>(
    trace: &Trace<T>,
    config: &Config,
    sink: &mut W,
) -> Result<()> {
    let fragments = document_fragments(trace, config);
    debug!("writing {} fragments", fragments.len());
    for fragment in fragments {
        writeln!(sink, "{}", fragment)?;
    }
    sink.flush()?;
    Ok(())
}

pub fn render_document<T: Scalar>(trace: &Trace<T>, config: &Config) -> String {
    document_fragments(trace, config)
        .into_iter()
        .map(|f| f + "\n")
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
