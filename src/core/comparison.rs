use crate::config::toml_config::{BenchmarkSettings, CalculatorSettings};
use crate::core::benchmark::Benchmark;
use crate::core::calculator::{with_recursion_stack, GeometricCalculator};
use crate::core::input::read_sequence;
use crate::domain::model::{ComparisonReport, GeometricSequence, MethodTiming};
use crate::domain::ports::Terminal;
use crate::utils::error::{GeoError, Result};
use crate::utils::monitor::SystemMonitor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonStage {
    AwaitingInput,
    Computing,
    Reporting,
    Done,
}

#[derive(Debug)]
pub enum ComparisonOutcome {
    Completed(ComparisonReport),
    /// 輸入無效，本次比較中止，回到選單
    Aborted(GeoError),
}

/// 一次完整的「迭代 vs 遞迴」比較
pub struct ComparisonFlow {
    benchmark: BenchmarkSettings,
    calculator: CalculatorSettings,
}

impl ComparisonFlow {
    pub fn new(benchmark: BenchmarkSettings, calculator: CalculatorSettings) -> Self {
        Self {
            benchmark,
            calculator,
        }
    }

    pub fn run<T: Terminal>(
        &self,
        terminal: &mut T,
        monitor: &mut SystemMonitor,
    ) -> Result<ComparisonOutcome> {
        let mut stage = ComparisonStage::AwaitingInput;
        tracing::debug!("Comparison stage: {:?}", stage);

        terminal.write_line("")?;
        terminal.write_line("=== Method Comparison ===")?;
        let input = read_sequence(terminal, self.calculator.max_terms);

        advance(&mut stage, ComparisonStage::Computing);
        let sequence = match input {
            Ok(sequence) => sequence,
            Err(e) if e.is_recoverable() => {
                tracing::warn!("⚠️ Comparison aborted: {}", e);
                terminal.write_line(&format!("Error: {}", e.user_friendly_message()))?;
                advance(&mut stage, ComparisonStage::Done);
                return Ok(ComparisonOutcome::Aborted(e));
            }
            Err(e) => return Err(e),
        };
        let report = self.compute(sequence, monitor)?;

        advance(&mut stage, ComparisonStage::Reporting);
        terminal.write_line("")?;
        terminal.write_line(&report.to_string())?;

        advance(&mut stage, ComparisonStage::Done);
        Ok(ComparisonOutcome::Completed(report))
    }

    /// 兩種方法各量測 `num_runs` 輪；公式解只算一次，不計時
    pub fn compute(
        &self,
        sequence: GeometricSequence,
        monitor: &mut SystemMonitor,
    ) -> Result<ComparisonReport> {
        tracing::info!("🚀 Benchmarking {}", sequence);
        let calc = GeometricCalculator::new(sequence, self.calculator.epsilon);
        let bench = Benchmark::from_settings(&self.benchmark);

        monitor.log_stats("Before iterative");
        let mut iterative_result = 0.0;
        let iterative_runs = bench.measure_runs(self.benchmark.num_runs, || {
            iterative_result = calc.sum_iterative();
        });
        tracing::debug!("Iterative run averages (ns): {:?}", iterative_runs);

        monitor.log_stats("Before recursive");
        let num_runs = self.benchmark.num_runs;
        let (recursive_result, recursive_runs) = with_recursion_stack(sequence.terms(), move || {
            let mut recursive_result = 0.0;
            let runs = bench.measure_runs(num_runs, || {
                recursive_result = calc.sum_recursive();
            });
            (recursive_result, runs)
        })?;
        tracing::debug!("Recursive run averages (ns): {:?}", recursive_runs);
        monitor.log_stats("After recursive");

        Ok(ComparisonReport {
            sequence,
            iterative: MethodTiming {
                result: iterative_result,
                run_averages_ns: iterative_runs,
            },
            recursive: MethodTiming {
                result: recursive_result,
                run_averages_ns: recursive_runs,
            },
            formula_result: calc.sum_formula(),
        })
    }
}

fn advance(stage: &mut ComparisonStage, next: ComparisonStage) {
    tracing::debug!("Comparison stage: {:?} -> {:?}", stage, next);
    *stage = next;
}
