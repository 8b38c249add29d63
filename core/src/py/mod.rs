// Python bindings (feature "python"): thin wrappers over the core, errors raised as ValueError.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::message::Locale;
use crate::metrics;
use crate::report::summarize_one;
use crate::WorkoutError;

fn value_err(e: WorkoutError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

#[pyfunction]
#[pyo3(signature = (tag, data, locale = None))]
fn summarize_package(tag: &str, data: Vec<f64>, locale: Option<&str>) -> PyResult<String> {
    let locale: Locale = match locale {
        Some(s) => s.parse().map_err(value_err)?,
        None => Locale::default(),
    };

    let summary = summarize_one(tag, &data, metrics::global()).map_err(value_err)?;
    Ok(summary.message(locale))
}

#[pyfunction]
#[pyo3(signature = (json_in, cfg_json = None))]
fn summarize_packages_json(json_in: &str, cfg_json: Option<&str>) -> PyResult<String> {
    crate::summarize_packages_json(json_in, cfg_json).map_err(value_err)
}

#[pyfunction]
fn metrics_text() -> PyResult<String> {
    metrics::global().gather_text().map_err(value_err)
}

#[pymodule]
fn workout_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(summarize_package, m)?)?;
    m.add_function(wrap_pyfunction!(summarize_packages_json, m)?)?;
    m.add_function(wrap_pyfunction!(metrics_text, m)?)?;
    Ok(())
}
