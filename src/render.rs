//! Drawing projected data with Matplotlib.
//!
//! The `draw_*` functions only build figures; [`present`] opens the
//! windows and blocks until the user closes them.

use tracing::{debug, info};

use crate::config::PlotStyle;
use crate::error::Result;
use crate::matvis::{path_coordinates, MatrixPaths};
use crate::project::{Coordinates, Projected, Spikes};
use crate::pyplot::{self, Axes, Figure};

/// Apply the style sheet, then create a figure with an `R`×`C` grid of
/// axes, hiding their frames if the style asks for it.
fn styled_subplots<const R: usize, const C: usize>(
    style: &PlotStyle) -> Result<(Figure, [[Axes; C]; R])> {
    pyplot::style_use(style.theme)?;
    let (fig, mut axes) = pyplot::subplots::<R, C>()?;
    if style.axis_off {
        for ax in axes.iter_mut().flatten() {
            ax.axis_off()?;
        }
    }
    Ok((fig, axes))
}

/// One polyline through the points, in their order.
pub fn draw_line(coords: &Coordinates, style: &PlotStyle) -> Result<Figure> {
    debug!(points = coords.len(), "drawing curve");
    let (fig, [[mut ax]]) = styled_subplots(style)?;
    ax.plot(&coords.x, &coords.y)?;
    Ok(fig)
}

/// Thin bars at each position over a flat line at height 0.
pub fn draw_spike(spikes: &Spikes, style: &PlotStyle) -> Result<Figure> {
    debug!(spikes = spikes.positions.len(), "drawing spectrum");
    let (fig, [[mut ax]]) = styled_subplots(style)?;
    ax.plot(&spikes.positions, &spikes.baseline)?
        .bar(&spikes.positions, &spikes.heights, style.bar_width)?;
    Ok(fig)
}

pub fn draw(projected: &Projected, style: &PlotStyle) -> Result<Figure> {
    match projected {
        Projected::Line(coords) => draw_line(coords, style),
        Projected::Spike(spikes) => draw_spike(spikes, style),
    }
}

/// The paths of `a`, `b` and `out` side by side, row 0 at the top.
///
/// These figures keep Matplotlib's default look; the style sheet of
/// `PlotStyle` is not applied.
pub fn draw_matrix(paths: &MatrixPaths, n: usize) -> Result<Figure> {
    debug!(steps = paths.out.len(), "drawing matrix paths");
    let (fig, mut axes) = pyplot::subplots::<1, 3>()?;
    let bottom = n.saturating_sub(1) as f64;
    for (ax, (title, path)) in axes[0].iter_mut().zip(
        [("a", &paths.a), ("b", &paths.b), ("out", &paths.out)]) {
        let coords = path_coordinates(path);
        ax.set_ylim(bottom, 0.)?
            .set_title(title)?
            .plot(&coords.x, &coords.y)?;
    }
    Ok(fig)
}

/// Show every figure drawn so far and block until the windows are
/// closed.
pub fn present() -> Result<()> {
    info!("waiting for the plot window to be closed");
    pyplot::show()?;
    info!("plot window closed");
    Ok(())
}
