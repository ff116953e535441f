pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::BenchConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "geo-sum-bench")]
#[command(about = "Compare iterative and recursive geometric series sums")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override benchmark.num_runs
    #[arg(long)]
    pub num_runs: Option<usize>,

    /// Override benchmark.warm_up_runs
    #[arg(long)]
    pub warm_up_runs: Option<usize>,

    /// Override benchmark.iterations
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Override calculator.max_terms
    #[arg(long)]
    pub max_terms: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log CPU and memory usage around each benchmark
    #[arg(long)]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 組合最終配置：預設值 < 設定檔 < 命令列
    pub fn resolve(&self) -> Result<BenchConfig> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::from_file(path)?,
            None => BenchConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut BenchConfig) {
        if let Some(num_runs) = self.num_runs {
            config.benchmark.num_runs = num_runs;
        }
        if let Some(warm_up_runs) = self.warm_up_runs {
            config.benchmark.warm_up_runs = warm_up_runs;
        }
        if let Some(iterations) = self.iterations {
            config.benchmark.iterations = iterations;
        }
        if let Some(max_terms) = self.max_terms {
            config.calculator.max_terms = max_terms;
        }
        if self.monitor {
            config.monitoring = Some(toml_config::MonitoringConfig { enabled: true });
        }
    }
}
