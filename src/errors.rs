//! Error types with diagnostics using miette
//!
//! Percentages are never an error (they are clamped); only the gauge's
//! physical dimensions and colour strings can be rejected.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{NumericError, ParseColorError};

/// Errors that occur while building gauge inputs
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GaugeError {
    #[error("invalid {field}: {source}")]
    #[diagnostic(
        code(arcgauge::invalid_number),
        help("sizes must be greater than zero and no more than half of f64::MAX")
    )]
    InvalidNumber {
        field: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("stroke width {stroke_width} must be smaller than size {size}")]
    #[diagnostic(
        code(arcgauge::invalid_dimensions),
        help("the arc radius is (size - stroke width) / 2 and has to stay positive")
    )]
    InvalidDimensions { size: f64, stroke_width: f64 },

    #[error("invalid colour: {value}")]
    #[diagnostic(
        code(arcgauge::invalid_color),
        help("use #rgb, #rrggbb, rgb(r, g, b) or a basic CSS colour name")
    )]
    InvalidColor { value: String },
}

impl From<ParseColorError> for GaugeError {
    fn from(err: ParseColorError) -> Self {
        GaugeError::InvalidColor { value: err.0 }
    }
}
