//! Plot `frequency,magnitude` lines read from standard input as bars
//! over a zero baseline.

use synth_plots::{logger, plot_stdin, PlotError, Projection};

fn main() -> Result<(), PlotError> {
    logger::init_cli_logger();
    plot_stdin(Projection::Spike)
        .inspect_err(|e| tracing::error!("{}", e))
}
