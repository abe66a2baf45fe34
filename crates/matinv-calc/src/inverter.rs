//! 逆矩陣計算

use matinv_core::{Matrix, MatrixError, Result, SolverConfig};

/// 逆矩陣計算器
///
/// 在增廣矩陣 [A | I] 上執行帶部分選主元的 Gauss-Jordan 消去，
/// 左半化為單位矩陣後右半即為 A⁻¹。
pub struct InversionCalculator;

impl InversionCalculator {
    /// 計算方陣的逆矩陣
    ///
    /// # 參數
    /// * `matrix` - 待求逆的方陣
    /// * `config` - 求逆參數配置（奇異判定容差）
    ///
    /// 消去過程中最佳主元絕對值低於 `pivot_tolerance` 時，
    /// 矩陣視為奇異，返回 `SingularMatrixError`。
    pub fn invert(matrix: &Matrix, config: &SolverConfig) -> Result<Matrix> {
        let n = matrix.dimension();
        let start_time = std::time::Instant::now();
        tracing::debug!("開始求逆：維度 {}×{}", n, n);

        // 構造增廣矩陣 [A | I]，每列長度 2n
        let mut augmented: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                let mut row: Vec<f64> = (0..n).map(|j| matrix.get(i, j)).collect();
                row.extend((0..n).map(|j| if i == j { 1.0 } else { 0.0 }));
                row
            })
            .collect();

        for col in 0..n {
            // 部分選主元：取該行以下絕對值最大的元素作為主元
            let mut pivot_row = col;
            let mut pivot_value = augmented[col][col].abs();
            for row in (col + 1)..n {
                let candidate = augmented[row][col].abs();
                if candidate > pivot_value {
                    pivot_row = row;
                    pivot_value = candidate;
                }
            }

            if pivot_value < config.pivot_tolerance {
                return Err(MatrixError::SingularMatrixError(format!(
                    "第 {} 行主元 {:.3e} 低於容差 {:.3e}",
                    col, pivot_value, config.pivot_tolerance
                )));
            }

            augmented.swap(col, pivot_row);

            // 主元列歸一
            let pivot = augmented[col][col];
            for j in 0..2 * n {
                augmented[col][j] /= pivot;
            }

            // 消去其他列的該行元素
            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = augmented[row][col];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..2 * n {
                    augmented[row][j] -= factor * augmented[col][j];
                }
            }
        }

        // 提取右半部分作為逆矩陣
        let inverse = Matrix::from_rows(
            augmented
                .iter()
                .map(|row| row[n..2 * n].to_vec())
                .collect(),
        )?;

        tracing::debug!("求逆完成：維度 {}×{}，耗時 {:?}", n, n, start_time.elapsed());

        Ok(inverse)
    }
}
