use crate::domain::model::GeometricSequence;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::thread;

/// 每層遞迴預留的堆疊大小 (debug build 的 frame 也在此範圍內)
const STACK_BYTES_PER_TERM: usize = 1024;
/// 遞迴以外的基本堆疊
const BASE_STACK_BYTES: usize = 2 * 1024 * 1024;

/// 遞迴 n 層所需的堆疊大小
pub fn recursion_stack_size(terms: usize) -> usize {
    terms
        .saturating_mul(STACK_BYTES_PER_TERM)
        .saturating_add(BASE_STACK_BYTES)
}

/// 在堆疊足以遞迴 `terms` 層的執行緒上執行 `f`，並等待其結束
///
/// 呼叫端會阻塞到 `f` 完成，因此流程仍是循序的。
pub fn with_recursion_stack<T, F>(terms: usize, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let handle = thread::Builder::new()
        .name("recursive-sum".to_string())
        .stack_size(recursion_stack_size(terms))
        .spawn(f)?;
    match handle.join() {
        Ok(value) => Ok(value),
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// 三種方式計算等比級數和
#[derive(Debug, Clone, Copy)]
pub struct GeometricCalculator {
    sequence: GeometricSequence,
    epsilon: f64,
}

impl GeometricCalculator {
    pub fn new(sequence: GeometricSequence, epsilon: f64) -> Self {
        Self { sequence, epsilon }
    }

    pub fn sequence(&self) -> &GeometricSequence {
        &self.sequence
    }

    /// 迴圈累加：O(n) 時間、O(1) 空間
    pub fn sum_iterative(&self) -> f64 {
        let mut sum = 0.0;
        let mut term = self.sequence.first_term();
        for _ in 0..self.sequence.terms() {
            sum += term;
            term *= self.sequence.ratio();
        }
        sum
    }

    /// 帶備忘錄的遞迴：f(a, r, k) = a + f(a*r, r, k-1)，f(_, _, 0) = 0
    ///
    /// 備忘錄只存在於單次呼叫內，以剩餘項數 k 為鍵。
    /// 遞迴深度為 n；n 很大時請透過 [`with_recursion_stack`] 呼叫。
    pub fn sum_recursive(&self) -> f64 {
        let mut memo: HashMap<usize, f64> = HashMap::new();
        recursive_sum(
            self.sequence.first_term(),
            self.sequence.ratio(),
            self.sequence.terms(),
            &mut memo,
        )
    }

    /// 公式解：r ≈ 1 時為 a·n，否則 a(1 − rⁿ)/(1 − r)
    pub fn sum_formula(&self) -> f64 {
        let a = self.sequence.first_term();
        let r = self.sequence.ratio();
        let n = self.sequence.terms() as f64;

        if (r - 1.0).abs() < self.epsilon {
            return a * n;
        }
        a * (1.0 - r.powf(n)) / (1.0 - r)
    }
}

fn recursive_sum(a: f64, r: f64, k: usize, memo: &mut HashMap<usize, f64>) -> f64 {
    if k == 0 {
        return 0.0;
    }
    if let Some(&cached) = memo.get(&k) {
        return cached;
    }
    let value = a + recursive_sum(a * r, r, k - 1, memo);
    memo.insert(k, value);
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn calculator(a: f64, r: f64, n: usize) -> GeometricCalculator {
        GeometricCalculator::new(GeometricSequence::new(a, r, n).unwrap(), EPSILON)
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-6 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_powers_of_two() {
        let calc = calculator(1.0, 2.0, 5);
        assert_eq!(calc.sum_iterative(), 31.0);
        assert_eq!(calc.sum_recursive(), 31.0);
        assert_close(calc.sum_formula(), 31.0);
    }

    #[test]
    fn test_unit_ratio_uses_product() {
        let calc = calculator(2.0, 1.0, 4);
        assert_eq!(calc.sum_iterative(), 8.0);
        assert_eq!(calc.sum_recursive(), 8.0);
        assert_eq!(calc.sum_formula(), 8.0);
    }

    #[test]
    fn test_ratio_within_epsilon_of_one_is_exact_product() {
        let calc = calculator(3.0, 1.0 + 1e-12, 7);
        assert_eq!(calc.sum_formula(), 21.0);
    }

    #[test]
    fn test_single_term_is_first_term() {
        for (a, r) in [(1.0, 2.0), (4.5, 0.5), (7.0, 1.0), (0.25, 10.0)] {
            let calc = calculator(a, r, 1);
            assert_eq!(calc.sum_iterative(), a);
            assert_eq!(calc.sum_recursive(), a);
            assert_close(calc.sum_formula(), a);
        }
    }

    #[test]
    fn test_methods_agree_across_range() {
        let first_terms = [0.01, 0.5, 1.0, 3.0, 250.0];
        let ratios = [0.1, 0.5, 0.9, 0.999, 1.0, 1.0 + 1e-12, 1.001, 1.1, 1.5, 2.0];
        let term_counts = [1, 2, 3, 10, 37, 100, 255, 400];

        for a in first_terms {
            for r in ratios {
                for n in term_counts {
                    let calc = calculator(a, r, n);
                    let iterative = calc.sum_iterative();
                    assert_close(calc.sum_recursive(), iterative);
                    assert_close(calc.sum_formula(), iterative);
                }
            }
        }
    }

    #[test]
    fn test_deep_recursion_on_sized_stack() {
        // 200k 層遠超過測試執行緒預設的 2MB 堆疊
        let calc = calculator(1.0, 0.5, 200_000);
        let recursive =
            with_recursion_stack(calc.sequence().terms(), move || calc.sum_recursive()).unwrap();
        assert_close(recursive, calc.sum_iterative());
        assert_close(recursive, 2.0);
    }

    #[test]
    fn test_recursion_stack_grows_with_terms() {
        assert!(recursion_stack_size(20_000) > recursion_stack_size(10_000));
        assert!(recursion_stack_size(1) >= BASE_STACK_BYTES);
        assert_eq!(recursion_stack_size(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_methods_agree() {
        let cases = [
            (1.0, 0.5, 20),
            (3.0, 1.1, 50),
            (0.1, 3.0, 15),
            (10.0, 0.99, 500),
            (2.0, 1.000001, 1000),
        ];

        for (a, r, n) in cases {
            let calc = calculator(a, r, n);
            let iterative = calc.sum_iterative();
            assert_close(calc.sum_recursive(), iterative);
            assert_close(calc.sum_formula(), iterative);
        }
    }

    #[test]
    fn test_recursive_memo_is_per_call() {
        let calc = calculator(1.0, 3.0, 4);
        assert_eq!(calc.sum_recursive(), 40.0);
        assert_eq!(calc.sum_recursive(), 40.0);
    }
}
