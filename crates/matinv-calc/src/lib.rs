//! # MatInv Calculation Engine
//!
//! 核心求逆計算引擎

pub mod inverter;

// Re-export 主要類型
pub use inverter::InversionCalculator;
