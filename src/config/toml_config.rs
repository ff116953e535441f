use crate::utils::error::{GeoError, Result};
use crate::utils::validation::{validate_at_least, validate_positive_finite, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub benchmark: BenchmarkSettings,
    pub calculator: CalculatorSettings,
    pub monitoring: Option<MonitoringConfig>,
}

/// 基準測試的重複次數設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkSettings {
    /// 每個方法量測幾輪，最後取平均
    pub num_runs: usize,
    /// 每輪量測前的暖身呼叫次數 (不計時)
    pub warm_up_runs: usize,
    /// 每輪計時的呼叫次數
    pub iterations: usize,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            num_runs: 5,
            warm_up_runs: 1000,
            iterations: 100_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// |r - 1| 小於此值時視為 r = 1
    pub epsilon: f64,
    /// n 的安全上限；遞迴量測在依 n 配置堆疊的執行緒上進行
    pub max_terms: usize,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            epsilon: 1e-10,
            max_terms: 1_000_000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl BenchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            GeoError::config(
                "config_file",
                format!("cannot read {}: {}", path.as_ref().display(), e),
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| GeoError::config("toml_parsing", format!("TOML parsing error: {}", e)))
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for BenchConfig {
    fn validate(&self) -> Result<()> {
        validate_at_least("benchmark.num_runs", self.benchmark.num_runs, 1)?;
        validate_at_least("benchmark.iterations", self.benchmark.iterations, 1)?;
        validate_positive_finite("calculator.epsilon", self.calculator.epsilon)?;
        validate_at_least("calculator.max_terms", self.calculator.max_terms, 1)?;
        Ok(())
    }
}
