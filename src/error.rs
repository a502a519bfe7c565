use thiserror::Error;

use crate::pyplot;

/// Errors of the plotting tools.
#[derive(Debug, Error)]
pub enum PlotError {
    /// A line of input does not hold two numeric comma-separated fields.
    /// `line` is 1-based.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Reading the input stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Matplotlib could not draw or display the figure.
    #[error("Display error: {0}")]
    Display(#[from] pyplot::Error),
}

pub type Result<T> = std::result::Result<T, PlotError>;
