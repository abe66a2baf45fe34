//! Python 綁定實現

use matinv_cache::{CachedMatrix, InverseResolver};
use matinv_core::{Matrix, MatrixError, SolverConfig};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// 引擎錯誤轉換為 Python 異常
fn to_py_err(error: MatrixError) -> PyErr {
    PyValueError::new_err(error.to_string())
}

/// Python 緩存矩陣
#[pyclass(name = "CachedMatrix")]
pub struct PyCachedMatrix {
    pub(crate) inner: CachedMatrix,
}

#[pymethods]
impl PyCachedMatrix {
    /// 創建緩存矩陣；未提供矩陣時預設為 1×1 零矩陣
    #[new]
    #[pyo3(signature = (rows = None))]
    fn new(rows: Option<Vec<Vec<f64>>>) -> PyResult<Self> {
        let inner = match rows {
            Some(rows) => CachedMatrix::new(Matrix::from_rows(rows).map_err(to_py_err)?),
            None => CachedMatrix::default(),
        };
        Ok(Self { inner })
    }

    /// 替換當前矩陣（非方陣時拋出 ValueError，狀態不變）
    fn set_matrix(&mut self, rows: Vec<Vec<f64>>) -> PyResult<()> {
        self.inner.set_matrix(rows).map_err(to_py_err)
    }

    /// 獲取當前矩陣
    fn matrix(&self) -> Vec<Vec<f64>> {
        self.inner.matrix().to_rows()
    }

    /// 獲取儲存的逆矩陣（不存在時為 None）
    fn inverse(&self) -> Option<Vec<Vec<f64>>> {
        self.inner.inverse().map(Matrix::to_rows)
    }

    /// 檢查緩存是否過期
    fn is_stale(&self) -> bool {
        self.inner.is_stale()
    }
}

/// Python 逆矩陣解析器
#[pyclass(name = "InverseResolver")]
pub struct PyInverseResolver {
    inner: InverseResolver,
}

#[pymethods]
impl PyInverseResolver {
    /// 創建解析器，可指定奇異判定容差
    #[new]
    #[pyo3(signature = (pivot_tolerance = None))]
    fn new(pivot_tolerance: Option<f64>) -> Self {
        let mut config = SolverConfig::new();
        if let Some(tolerance) = pivot_tolerance {
            config = config.with_pivot_tolerance(tolerance);
        }
        Self {
            inner: InverseResolver::new(config),
        }
    }

    /// 解析逆矩陣（奇異矩陣時拋出 ValueError）
    fn resolve(&mut self, mut cache: PyRefMut<'_, PyCachedMatrix>) -> PyResult<Vec<Vec<f64>>> {
        let inverse = self.inner.resolve(&mut cache.inner).map_err(to_py_err)?;
        Ok(inverse.to_rows())
    }

    /// 獲取緩存命中次數
    fn cache_hits(&self) -> u64 {
        self.inner.cache_hits()
    }

    /// 獲取緩存未命中次數
    fn cache_misses(&self) -> u64 {
        self.inner.cache_misses()
    }
}
