//! # MatInv Cache
//!
//! 逆矩陣緩存與失效追蹤模組

pub mod cached_matrix;
pub mod resolver;

// Re-export 主要類型
pub use cached_matrix::CachedMatrix;
pub use resolver::InverseResolver;
