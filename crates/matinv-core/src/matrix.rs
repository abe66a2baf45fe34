//! 方陣資料模型

use serde::{Deserialize, Serialize};

use crate::{MatrixError, Result};

/// N×N 方陣（row-major 連續儲存）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    /// 維度 N
    dimension: usize,

    /// 元素，依列連續排列，長度恆為 N×N
    data: Vec<f64>,
}

impl Matrix {
    /// 從巢狀列向量創建方陣
    ///
    /// 驗證輸入為方陣（每一列的長度都必須等於列數），
    /// 驗證失敗時返回 `ShapeError`，不產生任何部分狀態。
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(MatrixError::ShapeError { rows: 0, cols: 0 });
        }

        for row in &rows {
            if row.len() != dimension {
                return Err(MatrixError::ShapeError {
                    rows: dimension,
                    cols: row.len(),
                });
            }
        }

        let data = rows.into_iter().flatten().collect();
        Ok(Self { dimension, data })
    }

    /// 創建 N×N 零矩陣
    pub fn zeros(dimension: usize) -> Self {
        Self {
            dimension,
            data: vec![0.0; dimension * dimension],
        }
    }

    /// 創建 N×N 單位矩陣
    pub fn identity(dimension: usize) -> Self {
        let mut matrix = Self::zeros(dimension);
        for i in 0..dimension {
            matrix.set(i, i, 1.0);
        }
        matrix
    }

    /// 創建對角矩陣（維度 = 對角元素個數）
    pub fn diagonal(entries: &[f64]) -> Self {
        let mut matrix = Self::zeros(entries.len());
        for (i, &value) in entries.iter().enumerate() {
            matrix.set(i, i, value);
        }
        matrix
    }

    /// 獲取維度 N
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// 獲取元素 (i, j)
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.dimension + j]
    }

    /// 設置元素 (i, j)
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.dimension + j] = value;
    }

    /// 轉換為巢狀列向量
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.dimension == 0 {
            return Vec::new();
        }
        self.data
            .chunks(self.dimension)
            .map(|row| row.to_vec())
            .collect()
    }

    /// 矩陣乘法
    ///
    /// 兩個矩陣的維度必須相同，否則返回 `DimensionMismatch`。
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.dimension != other.dimension {
            return Err(MatrixError::DimensionMismatch(format!(
                "{}×{} 無法與 {}×{} 相乘",
                self.dimension, self.dimension, other.dimension, other.dimension
            )));
        }

        let n = self.dimension;
        let mut product = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += self.get(i, k) * other.get(k, j);
                }
                product.set(i, j, sum);
            }
        }
        Ok(product)
    }

    /// 近似相等判定（逐元素誤差不超過容差）
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.dimension == other.dimension
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Default for Matrix {
    /// 預設為 1×1 零矩陣
    fn default() -> Self {
        Self::zeros(1)
    }
}
