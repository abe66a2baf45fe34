//! 髒標記緩存矩陣

use matinv_core::{Matrix, Result};

/// 帶髒標記的緩存矩陣
///
/// 保存當前矩陣值、最近一次計算的逆矩陣（若有）與髒標記。
/// 髒標記為 true 時，儲存的逆矩陣一律不得視為有效。
#[derive(Debug, Clone)]
pub struct CachedMatrix {
    /// 當前矩陣值
    matrix: Matrix,

    /// 最近一次計算的逆矩陣
    inverse: Option<Matrix>,

    /// 髒標記：true 表示逆矩陣（即使仍儲存著）不對應當前矩陣
    dirty: bool,
}

impl CachedMatrix {
    /// 以初始矩陣創建緩存
    ///
    /// 初始狀態：尚無逆矩陣，髒標記為 true。
    pub fn new(matrix: Matrix) -> Self {
        Self {
            matrix,
            inverse: None,
            dirty: true,
        }
    }

    /// 替換當前矩陣
    ///
    /// 先驗證輸入為方陣，驗證失敗時返回 `ShapeError`，所有欄位
    /// 保持原狀。成功時替換矩陣、清除逆矩陣並設置髒標記，
    /// 替換之後不可能再讀到舊的逆矩陣。
    pub fn set_matrix(&mut self, rows: Vec<Vec<f64>>) -> Result<()> {
        let matrix = Matrix::from_rows(rows)?;
        self.matrix = matrix;
        self.inverse = None;
        self.dirty = true;
        Ok(())
    }

    /// 獲取當前矩陣引用
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// 寫回逆矩陣並清除髒標記
    ///
    /// 信任呼叫方寫回的逆矩陣確實對應當前矩陣，不做正確性檢查。
    pub fn set_inverse(&mut self, inverse: Matrix) {
        self.inverse = Some(inverse);
        self.dirty = false;
    }

    /// 獲取儲存的逆矩陣（可能不存在；是否過期需另以 `is_stale` 判斷）
    pub fn inverse(&self) -> Option<&Matrix> {
        self.inverse.as_ref()
    }

    /// 檢查緩存是否過期
    ///
    /// 從未計算過逆矩陣，或矩陣在上次計算後被替換過，皆為過期。
    pub fn is_stale(&self) -> bool {
        self.dirty
    }
}

impl Default for CachedMatrix {
    /// 預設為 1×1 零矩陣
    fn default() -> Self {
        Self::new(Matrix::default())
    }
}
