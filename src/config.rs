use crate::latex::format::NumberFormat;

/// Options for a single reduction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Report every elimination on its own instead of one combined step per
    /// pivot column.
    pub show_all_steps: bool,
    pub number_format: NumberFormat,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_all_steps(mut self, show_all_steps: bool) -> Self {
        self.show_all_steps = show_all_steps;
        self
    }

    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
