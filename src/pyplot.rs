//! Binding to the parts of [Matplotlib][]'s `pyplot` interface the plotting
//! tools need.
//!
//! The interface stays close to Matplotlib's explicit one (figures owning
//! axes, methods on axes) while errors are returned as Rust values instead
//! of Python exceptions.
//!
//! [Matplotlib]: https://matplotlib.org/

use std::path::Path;
use lazy_static::lazy_static;
use pyo3::{
    prelude::*,
    intern,
    exceptions::{PyFileNotFoundError, PyPermissionError, PyValueError},
    types::PyDict,
};
use numpy::PyArray2;

macro_rules! getattr {
    ($py: ident, $lib: expr, $f: literal) => {
        $lib.getattr($py, intern!($py, $f))
    };
}

/// Call the method `$m` of the Python object `$obj`, discarding its
/// return value.
macro_rules! meth {
    ($obj: expr, $m: ident, $args: expr) => {
        Python::with_gil(|py| {
            $obj.call_method1(py, intern!(py, stringify!($m)), $args)
                .map(|_| ())
                .map_err(Error::Python)
        })
    };
}

/// Possible errors of matplotlib functions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The Python library "matplotlib" was not found.
    #[error("The matplotlib library has not been found.\n\
             Please install it.  See https://matplotlib.org/")]
    NoMatplotlib,
    /// The path contains an element that is not a directory or does
    /// not exist.
    #[error("A path contains an element that is not a directory or \
             does not exist")]
    FileNotFoundError,
    /// Permission denied to access or create the filesystem path.
    #[error("Permission denied to access or create the filesystem path")]
    PermissionError,
    /// Other Python errors (including a backend unable to open a window).
    #[error("Python error: {0}")]
    Python(#[from] PyErr),
}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py|
        PyModule::import(py, intern!(py, $m)).map(|m| m.into()))
}}

lazy_static! {
    static ref PYPLOT: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
    static ref STYLE: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.style")
    };
    static ref NUMPY: Result<Py<PyModule>, PyErr> = {
        pyimport!("numpy")
    };
}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|_| Error::NoMatplotlib)
}}

/// Values that can be handed to Matplotlib as a 1-D numpy array.
pub trait Data {
    fn to_numpy(&self, py: Python, numpy: &Py<PyModule>) -> PyResult<PyObject>;
}

impl<T> Data for T where T: AsRef<[f64]> + ?Sized {
    fn to_numpy(&self, py: Python, numpy: &Py<PyModule>) -> PyResult<PyObject> {
        // Matplotlib artists keep the arrays they are given until they
        // are drawn, so the array must own its data.
        getattr!(py, numpy, "array")?.call1(py, (self.as_ref().to_vec(),))
    }
}

#[derive(Debug, Clone)]
pub struct Axes {
    ax: PyObject,
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

#[inline(always)]
fn grid<const R: usize, const C: usize, U>(
    f: impl Fn(usize, usize) -> U) -> [[U; C]; R] {
    let mut r = 0;
    [(); R].map(|_| {
        let mut c = 0;
        let row = [(); C].map(|_| {
            let y = f(r, c);
            c += 1;
            y });
        r += 1;
        row })
}

impl Figure {
    /// Add an `R`×`C` grid of axes to the figure.
    pub fn subplots<const R: usize, const C: usize>(
        &self) -> Result<[[Axes; C]; R], Error> {
        Python::with_gil(|py| {
            // Always get a 2-D array back, whatever `R` and `C` are.
            let kwargs = PyDict::new(py);
            kwargs.set_item("squeeze", false)?;
            let axs = self.fig.call_method(
                py, intern!(py, "subplots"), (R, C), Some(kwargs))?;
            let axg: &PyArray2<PyObject> =
                axs.downcast(py).map_err(PyErr::from)?;
            let cells = (0 .. R * C)
                .map(|i| axg.get_owned([i / C, i % C]).map(|ax| Axes { ax }))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| PyValueError::new_err(
                    "subplots returned an array of unexpected shape"))?;
            Ok(grid(|r, c| cells[r * C + c].clone()))
        })
    }

    pub fn save(&self) -> Savefig {
        Savefig { fig: self.fig.clone(), dpi: None }
    }
}

pub struct Savefig {
    fig: PyObject,
    dpi: Option<f64>,
}

impl Savefig {
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        if dpi > 0. {
            self.dpi = Some(dpi);
        } else {
            self.dpi = None;
        }
        self
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new(py);
            if let Some(dpi) = self.dpi {
                kwargs.set_item("dpi", dpi)?;
            }
            self.fig.call_method(
                py, intern!(py, "savefig"),
                (path.as_ref(),), Some(kwargs)
            ).map_err(|e| {
                    if e.is_instance_of::<PyFileNotFoundError>(py) {
                        Error::FileNotFoundError
                    } else if e.is_instance_of::<PyPermissionError>(py) {
                        Error::PermissionError
                    } else {
                        Error::Python(e)
                    }
                })?;
            Ok(())
        })
    }
}

/// Create a new figure through pyplot so that [`show`] displays it.
pub fn figure() -> Result<Figure, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let fig = getattr!(py, pyplot, "figure")?.call0(py)?;
        Ok(Figure { fig })
    })
}

pub fn subplots<const R: usize, const C: usize>(
) -> Result<(Figure, [[Axes; C]; R]), Error> {
    let fig = figure()?;
    let ax = fig.subplots()?;
    Ok((fig, ax))
}

/// Use the Matplotlib style sheet `name` (e.g. "ggplot") for the
/// figures created afterwards.
pub fn style_use(name: &str) -> Result<(), Error> {
    let style = pymod!(STYLE)?;
    Python::with_gil(|py| {
        getattr!(py, style, "use")?.call1(py, (name,))?;
        Ok(())
    })
}

/// Display all open figures and block until their windows are closed.
///
/// Fails if no backend is able to open a window, for example when no
/// display is available.
pub fn show() -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        getattr!(py, pyplot, "show")?.call0(py)?;
        Ok(())
    })
}


impl Axes {
    /// Plot `y` versus `x` as one connected line.
    pub fn plot<D>(&mut self, x: &D, y: &D) -> Result<&mut Self, Error>
    where D: Data + ?Sized {
        let numpy = pymod!(NUMPY)?;
        Python::with_gil(|py| {
            let xn = x.to_numpy(py, numpy)?;
            let yn = y.to_numpy(py, numpy)?;
            self.ax.call_method1(py, intern!(py, "plot"), (xn, yn))
        })?;
        Ok(self)
    }

    /// Draw bars of the given `height` centered on each `x`.
    pub fn bar<D>(&mut self, x: &D, height: &D, width: f64)
                  -> Result<&mut Self, Error>
    where D: Data + ?Sized {
        let numpy = pymod!(NUMPY)?;
        Python::with_gil(|py| {
            let xn = x.to_numpy(py, numpy)?;
            let hn = height.to_numpy(py, numpy)?;
            self.ax.call_method1(py, intern!(py, "bar"), (xn, hn, width))
        })?;
        Ok(self)
    }

    /// Hide the axis lines, ticks, tick labels and frame.
    pub fn axis_off(&mut self) -> Result<&mut Self, Error> {
        meth!(self.ax, axis, ("off",))?;
        Ok(self)
    }

    /// Set the y-axis view limits.  A `bottom` larger than `top` flips
    /// the axis.
    pub fn set_ylim(&mut self, bottom: f64, top: f64)
                    -> Result<&mut Self, Error> {
        meth!(self.ax, set_ylim, (bottom, top))?;
        Ok(self)
    }

    pub fn set_title(&mut self, v: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_title, (v,))?;
        Ok(self)
    }
}
