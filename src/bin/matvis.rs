//! Show how a naive matrix product walks through its operands.

use synth_plots::{logger, plot_matrix_paths, PlotError, PlotStyle};

fn main() -> Result<(), PlotError> {
    logger::init_cli_logger();
    let n = PlotStyle::default().matrix_size;
    plot_matrix_paths(n).inspect_err(|e| tracing::error!("{}", e))
}
