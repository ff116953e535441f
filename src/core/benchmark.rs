use crate::config::toml_config::BenchmarkSettings;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// 簡單的計時工具：先暖身，再逐次計時並取平均
///
/// 不做離群值剔除，也不回報變異數。
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    warm_up_runs: usize,
    iterations: usize,
}

impl Benchmark {
    /// `iterations` 為 0 時以 1 計
    pub fn new(warm_up_runs: usize, iterations: usize) -> Self {
        Self {
            warm_up_runs,
            iterations: iterations.max(1),
        }
    }

    pub fn from_settings(settings: &BenchmarkSettings) -> Self {
        Self::new(settings.warm_up_runs, settings.iterations)
    }

    /// 回傳每次呼叫的平均耗時 (ns)
    pub fn measure<T, F>(&self, mut f: F) -> f64
    where
        F: FnMut() -> T,
    {
        for _ in 0..self.warm_up_runs {
            black_box(f());
        }

        let mut total = Duration::ZERO;
        for _ in 0..self.iterations {
            let start = Instant::now();
            black_box(f());
            total += start.elapsed();
        }

        total.as_nanos() as f64 / self.iterations as f64
    }

    /// 重複量測 `runs` 輪，回傳每輪的平均值
    pub fn measure_runs<T, F>(&self, runs: usize, mut f: F) -> Vec<f64>
    where
        F: FnMut() -> T,
    {
        (0..runs).map(|_| self.measure(&mut f)).collect()
    }
}
