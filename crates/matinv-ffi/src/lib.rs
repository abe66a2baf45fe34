//! # MatInv FFI
//!
//! Python 綁定層（PyO3）

use pyo3::prelude::*;

pub mod python;

/// Python 模組註冊
#[pymodule]
fn matinv_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyCachedMatrix>()?;
    m.add_class::<python::PyInverseResolver>()?;
    Ok(())
}
