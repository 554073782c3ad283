use crate::utils::error::{Result, StringToolsError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(StringToolsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_excludes(field_name: &str, value: &str, forbidden: char) -> Result<()> {
    if value.contains(forbidden) {
        return Err(StringToolsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must not contain {:?}", forbidden),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(StringToolsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("wrap.line_break", "\n").is_ok());
        assert!(validate_non_empty_string("wrap.line_break", "").is_err());
    }

    #[test]
    fn test_validate_excludes() {
        assert!(validate_excludes("wrap.html_break", "<br/>", '\n').is_ok());
        assert!(validate_excludes("wrap.html_break", "<br/>\n", '\n').is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("wrap.max_chars_per_line", 60usize, 0, 10_000).is_ok());
        assert!(validate_range("wrap.max_chars_per_line", 0usize, 0, 10_000).is_ok());
        assert!(validate_range("wrap.max_chars_per_line", 10_001usize, 0, 10_000).is_err());
    }
}
