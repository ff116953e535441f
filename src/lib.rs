pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{console::LineConsole, menu::MenuLoop};
pub use config::toml_config::BenchConfig;
pub use self::core::{
    benchmark::Benchmark, calculator::GeometricCalculator, comparison::ComparisonFlow,
};
pub use utils::error::{GeoError, Result};
