use crate::utils::error::{GeoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_at_least(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(GeoError::config(
            field_name,
            format!("value {} must be at least {}", value, min_value),
        ));
    }
    Ok(())
}

pub fn validate_positive_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GeoError::config(
            field_name,
            format!("value {} must be a finite number greater than 0", value),
        ));
    }
    Ok(())
}

/// 解析使用者輸入的實數，必須嚴格大於 0
pub fn parse_positive_real(field_name: &str, raw: &str) -> Result<f64> {
    let reason = || format!("please enter a value {} > 0", field_name);

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| GeoError::invalid_input(field_name, raw, reason()))?;

    // NaN 與無限大也不接受
    if !value.is_finite() || value <= 0.0 {
        return Err(GeoError::invalid_input(field_name, raw, reason()));
    }
    Ok(value)
}

/// 解析使用者輸入的項數，必須是正整數且不超過上限
pub fn parse_term_count(field_name: &str, raw: &str, max_terms: usize) -> Result<usize> {
    let value: i64 = raw.trim().parse().map_err(|_| {
        GeoError::invalid_input(field_name, raw, format!("please enter a value {} > 0", field_name))
    })?;

    if value <= 0 {
        return Err(GeoError::invalid_input(
            field_name,
            raw,
            format!("please enter a value {} > 0", field_name),
        ));
    }

    match usize::try_from(value) {
        Ok(count) if count <= max_terms => Ok(count),
        _ => Err(GeoError::invalid_input(
            field_name,
            raw,
            format!("{} must not exceed {}", field_name, max_terms),
        )),
    }
}
