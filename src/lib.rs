//! Small plotting tools used while developing a software synthesizer.
//!
//! Usage
//! -----
//!
//! `plot_curve` and `visualize_fft` read `x,y` lines from standard input
//! and draw them as a curve or as a spectrum.  `matvis` draws the index
//! paths of a naive matrix product.  All of them end by opening a
//! [Matplotlib][] window and wait until it is closed.
//!
//! ```sh
//! printf '0,1\n1,3\n2,2\n' | plot_curve
//! printf '0,10\n1,5\n' | visualize_fft
//! matvis
//! ```
//!
//! [Matplotlib]: https://matplotlib.org/

pub mod config;
pub mod error;
pub mod logger;
pub mod matvis;
pub mod project;
pub mod pyplot;
pub mod record;
pub mod render;

pub use config::PlotStyle;
pub use error::{PlotError, Result};
pub use project::{Coordinates, Projected, Projection, Spikes};
pub use record::{read_records, Record};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Read records from standard input and show them with `projection`.
///
/// Nothing is drawn if the input does not parse.
pub fn plot_stdin(projection: Projection) -> Result<()> {
    let style = PlotStyle::default();
    let records = record::read_stdin()?;
    tracing::info!(records = records.len(), ?projection, "input read");
    let projected = projection.apply(&records);
    let _fig = render::draw(&projected, &style)?;
    render::present()
}

/// Show the index paths of the product of two `n`×`n` matrices.
pub fn plot_matrix_paths(n: usize) -> Result<()> {
    let paths = matvis::matrix_paths(n);
    tracing::debug!(b = ?paths.b, "right operand path");
    let _fig = render::draw_matrix(&paths, n)?;
    render::present()
}
