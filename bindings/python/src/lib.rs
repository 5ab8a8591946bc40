use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

/// Convert a `BlurError` into a Python `ValueError`.
fn to_py_err(e: gridblur_core::BlurError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Blur raw RGB pixel data with the 3x3 kernel.
///
/// Args:
///     data: Raw pixel bytes in RGB order, row-major (length must be width * height * 3).
///     width: Image width in pixels (must be > 0).
///     height: Image height in pixels (must be > 0).
///
/// Returns:
///     A bytes object of the same length containing the blurred pixels.
///
/// Raises:
///     ValueError: if the dimensions are not positive or do not match the data.
#[pyfunction]
fn blur(py: Python<'_>, data: &[u8], width: i64, height: i64) -> PyResult<Py<PyBytes>> {
    // The blur is pure Rust and touches no Python objects, so release the GIL.
    let pixels = py
        .allow_threads(|| gridblur_core::blur_rgb(data, width, height))
        .map_err(to_py_err)?;
    Ok(PyBytes::new(py, &pixels).into())
}

/// Deterministic 3x3 blur for RGB grids (Rust-powered).
#[pymodule]
fn gridblur(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(blur, m)?)?;
    Ok(())
}
