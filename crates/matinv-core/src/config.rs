//! 求逆參數配置

use serde::{Deserialize, Serialize};

/// 求逆參數配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// 奇異判定容差
    /// 消去過程中主元絕對值低於此值時，矩陣視為奇異
    pub pivot_tolerance: f64,

    /// 驗證容差
    /// 用於 M × M⁻¹ ≈ I 之類的近似相等判定
    pub verify_tolerance: f64,
}

impl SolverConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            pivot_tolerance: 1e-12,
            verify_tolerance: 1e-9,
        }
    }

    /// 建構器模式：設置奇異判定容差
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// 建構器模式：設置驗證容差
    pub fn with_verify_tolerance(mut self, tolerance: f64) -> Self {
        self.verify_tolerance = tolerance;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
