use crate::utils::error::{GeoError, Result};
use std::fmt;

/// 等比數列描述：首項 a、公比 r、項數 n
///
/// 建立後不可變；每次比較流程都從使用者輸入重新建立。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricSequence {
    first_term: f64,
    ratio: f64,
    terms: usize,
}

impl GeometricSequence {
    pub fn new(first_term: f64, ratio: f64, terms: usize) -> Result<Self> {
        if !first_term.is_finite() || first_term <= 0.0 {
            return Err(GeoError::invalid_input(
                "a",
                first_term.to_string(),
                "please enter a value a > 0",
            ));
        }
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(GeoError::invalid_input(
                "r",
                ratio.to_string(),
                "please enter a value r > 0",
            ));
        }
        if terms == 0 {
            return Err(GeoError::invalid_input("n", "0", "please enter a value n > 0"));
        }

        Ok(Self {
            first_term,
            ratio,
            terms,
        })
    }

    pub fn first_term(&self) -> f64 {
        self.first_term
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn terms(&self) -> usize {
        self.terms
    }
}

impl fmt::Display for GeometricSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={}, r={}, n={}", self.first_term, self.ratio, self.terms)
    }
}

/// 單一方法的測量結果
#[derive(Debug, Clone, PartialEq)]
pub struct MethodTiming {
    pub result: f64,
    /// 每輪的平均耗時 (ns)
    pub run_averages_ns: Vec<f64>,
}

impl MethodTiming {
    pub fn average_ns(&self) -> f64 {
        if self.run_averages_ns.is_empty() {
            return 0.0;
        }
        self.run_averages_ns.iter().sum::<f64>() / self.run_averages_ns.len() as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub sequence: GeometricSequence,
    pub iterative: MethodTiming,
    pub recursive: MethodTiming,
    pub formula_result: f64,
}

impl ComparisonReport {
    /// 遞迴平均時間 / 迭代平均時間；迭代平均為 0 時無法比較
    pub fn speed_ratio(&self) -> Option<f64> {
        let iterative = self.iterative.average_ns();
        if iterative > 0.0 {
            Some(self.recursive.average_ns() / iterative)
        } else {
            None
        }
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Comparison Results ===")?;
        writeln!(
            f,
            "Iterative: {:.3} (time: {:.3} ns)",
            self.iterative.result,
            self.iterative.average_ns()
        )?;
        writeln!(
            f,
            "Recursive: {:.3} (time: {:.3} ns)",
            self.recursive.result,
            self.recursive.average_ns()
        )?;
        write!(f, "Formula:   {:.2}", self.formula_result)?;

        if let Some(ratio) = self.speed_ratio() {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "Time ratio (recursive/iterative): {:.2}x", ratio)?;
            if ratio > 1.0 {
                write!(f, "Iterative method is faster by {:.2}%", (ratio - 1.0) * 100.0)?;
            } else {
                write!(f, "Recursive method is faster by {:.2}%", (1.0 - ratio) * 100.0)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(result: f64, runs: &[f64]) -> MethodTiming {
        MethodTiming {
            result,
            run_averages_ns: runs.to_vec(),
        }
    }

    #[test]
    fn test_sequence_rejects_non_positive_values() {
        assert!(GeometricSequence::new(1.0, 2.0, 5).is_ok());
        assert!(GeometricSequence::new(0.0, 2.0, 5).is_err());
        assert!(GeometricSequence::new(1.0, -2.0, 5).is_err());
        assert!(GeometricSequence::new(1.0, 2.0, 0).is_err());
        assert!(GeometricSequence::new(f64::NAN, 2.0, 5).is_err());
    }

    #[test]
    fn test_average_of_run_averages() {
        let t = timing(31.0, &[10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(t.average_ns(), 30.0);
        assert_eq!(timing(0.0, &[]).average_ns(), 0.0);
    }

    #[test]
    fn test_report_iterative_faster() {
        let report = ComparisonReport {
            sequence: GeometricSequence::new(1.0, 2.0, 5).unwrap(),
            iterative: timing(31.0, &[10.0]),
            recursive: timing(31.0, &[25.0]),
            formula_result: 31.0,
        };

        assert_eq!(report.speed_ratio(), Some(2.5));
        let text = report.to_string();
        assert!(text.contains("Iterative: 31.000 (time: 10.000 ns)"));
        assert!(text.contains("Recursive: 31.000 (time: 25.000 ns)"));
        assert!(text.contains("Formula:   31.00"));
        assert!(text.contains("Time ratio (recursive/iterative): 2.50x"));
        assert!(text.contains("Iterative method is faster by 150.00%"));
    }

    #[test]
    fn test_report_recursive_faster() {
        let report = ComparisonReport {
            sequence: GeometricSequence::new(2.0, 1.0, 4).unwrap(),
            iterative: timing(8.0, &[40.0]),
            recursive: timing(8.0, &[30.0]),
            formula_result: 8.0,
        };

        assert!(report
            .to_string()
            .contains("Recursive method is faster by 25.00%"));
    }

    #[test]
    fn test_report_omits_ratio_when_iterative_time_is_zero() {
        let report = ComparisonReport {
            sequence: GeometricSequence::new(2.0, 1.0, 4).unwrap(),
            iterative: timing(8.0, &[0.0]),
            recursive: timing(8.0, &[3.0]),
            formula_result: 8.0,
        };

        assert_eq!(report.speed_ratio(), None);
        let text = report.to_string();
        assert!(text.ends_with("Formula:   8.00"));
        assert!(!text.contains("Time ratio"));
    }
}
