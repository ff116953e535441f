use crate::domain::model::GeometricSequence;
use crate::domain::ports::Terminal;
use crate::utils::error::{GeoError, Result};
use crate::utils::validation::{parse_positive_real, parse_term_count};

/// 依序讀取 a、r、n；任何一項無效就立即中止，不重試
pub fn read_sequence<T: Terminal>(terminal: &mut T, max_terms: usize) -> Result<GeometricSequence> {
    let a = read_field(terminal, "First term (a): ", "a")?;
    let a = parse_positive_real("a", &a)?;

    let r = read_field(terminal, "Ratio (r): ", "r")?;
    let r = parse_positive_real("r", &r)?;

    let n = read_field(terminal, "Number of terms (n): ", "n")?;
    let n = parse_term_count("n", &n, max_terms)?;

    GeometricSequence::new(a, r, n)
}

fn read_field<T: Terminal>(terminal: &mut T, prompt: &str, field: &str) -> Result<String> {
    terminal.write_prompt(prompt)?;
    terminal.read_token()?.ok_or_else(|| {
        GeoError::invalid_input(field, "<end of input>", format!("please enter a value {} > 0", field))
    })
}
