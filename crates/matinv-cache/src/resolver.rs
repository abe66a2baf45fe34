//! 逆矩陣解析

use matinv_calc::InversionCalculator;
use matinv_core::{Matrix, Result, SolverConfig};

use crate::CachedMatrix;

/// 逆矩陣解析器
///
/// 緩存有效時直接返回儲存的逆矩陣，否則呼叫求逆計算器
/// 重新計算並寫回緩存。
pub struct InverseResolver {
    /// 求逆參數配置
    config: SolverConfig,

    /// 緩存命中次數
    cache_hits: u64,

    /// 緩存未命中次數
    cache_misses: u64,
}

impl InverseResolver {
    /// 創建新的解析器
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            cache_hits: 0,
            cache_misses: 0,
        }
    }

    /// 解析逆矩陣
    ///
    /// 1. 逆矩陣存在且緩存未過期：命中，直接返回儲存值
    /// 2. 否則重新計算：求逆失敗時錯誤向上傳遞且不改動緩存，
    ///    成功時寫回緩存後返回
    pub fn resolve(&mut self, cache: &mut CachedMatrix) -> Result<Matrix> {
        if let Some(inverse) = cache.inverse() {
            if !cache.is_stale() {
                self.cache_hits += 1;
                tracing::debug!("緩存命中，返回已計算的逆矩陣");
                return Ok(inverse.clone());
            }
        }

        self.cache_misses += 1;
        tracing::debug!("緩存未命中，重新計算逆矩陣");

        let inverse = InversionCalculator::invert(cache.matrix(), &self.config)?;
        cache.set_inverse(inverse.clone());

        Ok(inverse)
    }

    /// 獲取緩存命中次數
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    /// 獲取緩存未命中次數
    pub fn cache_misses(&self) -> u64 {
        self.cache_misses
    }

    /// 獲取配置引用
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl Default for InverseResolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
