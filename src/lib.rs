//! # MatInv
//!
//! 逆矩陣緩存引擎：矩陣未變動時重複請求逆矩陣直接命中緩存，
//! 矩陣被替換時精確失效並重新計算

// Re-export 主要類型
pub use matinv_cache::{CachedMatrix, InverseResolver};
pub use matinv_calc::InversionCalculator;
pub use matinv_core::{Matrix, MatrixError, Result, SolverConfig};
