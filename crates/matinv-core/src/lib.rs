//! # MatInv Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod matrix;

// Re-export 主要類型
pub use config::SolverConfig;
pub use matrix::Matrix;

/// 矩陣引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("矩陣形狀錯誤，必須為方陣: {rows}×{cols}")]
    ShapeError { rows: usize, cols: usize },

    #[error("奇異矩陣無法求逆: {0}")]
    SingularMatrixError(String),

    #[error("維度不匹配: {0}")]
    DimensionMismatch(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
