/// Fixed look of the plots.  There is no way to change it from the
/// command line; [`PlotStyle::default`] is what the tools use.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Matplotlib style sheet applied before the curve and spectrum
    /// figures are created.
    pub theme: &'static str,
    /// Hide axes and frame on the curve and spectrum figures.
    pub axis_off: bool,
    /// Width of the spectrum bars, in data units.
    pub bar_width: f64,
    /// Dimension of the square matrices whose index paths `matvis` draws.
    pub matrix_size: usize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            theme: "ggplot",
            axis_off: true,
            bar_width: 0.1,
            matrix_size: 4,
        }
    }
}
