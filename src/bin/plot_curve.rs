//! Plot `x,y` lines read from standard input as a single curve.

use synth_plots::{logger, plot_stdin, PlotError, Projection};

fn main() -> Result<(), PlotError> {
    logger::init_cli_logger();
    plot_stdin(Projection::Line)
        .inspect_err(|e| tracing::error!("{}", e))
}
