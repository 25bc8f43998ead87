use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Largest decimal-place count `validate_max_decimal_places` accepts as a limit.
pub const MAX_CHECKED_DECIMAL_PLACES: u32 = 10;

/// Turns a field name into the subject of an error message.
///
/// `""` and `"value"` read as "The value"; `snake_case` and dotted paths become
/// space separated with the first letter capitalized.
pub fn humanize_field_name(field_name: &str) -> String {
    if field_name.is_empty() || field_name == "value" {
        return "The value".to_string();
    }

    let spaced: String = field_name
        .chars()
        .map(|c| if c == '_' || c == '.' { ' ' } else { c })
        .collect();
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "The value".to_string(),
    }
}

pub fn validate_required<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CatalogError::NullArgument {
        field: field_name.to_string(),
    })
}

pub fn validate_not_empty(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CatalogError::invalid_range(
            field_name,
            format!("{} is empty", humanize_field_name(field_name)),
        ));
    }
    Ok(())
}

pub fn validate_not_whitespace_only(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid_range(
            field_name,
            format!("{} is whitespace-only", humanize_field_name(field_name)),
        ));
    }
    Ok(())
}

pub fn validate_no_leading_or_trailing_whitespace(field_name: &str, value: &str) -> Result<()> {
    if value.starts_with(char::is_whitespace) {
        return Err(CatalogError::invalid_range(
            field_name,
            format!("{} begins with whitespace", humanize_field_name(field_name)),
        ));
    }
    if value.ends_with(char::is_whitespace) {
        return Err(CatalogError::invalid_range(
            field_name,
            format!("{} ends with whitespace", humanize_field_name(field_name)),
        ));
    }
    Ok(())
}

/// Length is counted in chars, not bytes.
pub fn validate_length(field_name: &str, value: &str, min: usize, max: usize) -> Result<()> {
    if min >= max {
        return Err(CatalogError::InvalidBounds {
            message: format!("min length {} is not less than max length {}", min, max),
        });
    }

    let length = value.chars().count();
    if length < min {
        return Err(CatalogError::invalid_range(
            field_name,
            format!(
                "{} is shorter than {} characters",
                humanize_field_name(field_name),
                min
            ),
        ));
    }
    if length > max {
        return Err(CatalogError::invalid_range(
            field_name,
            format!(
                "{} is longer than {} characters",
                humanize_field_name(field_name),
                max
            ),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if min >= max {
        return Err(CatalogError::InvalidBounds {
            message: format!("min {} is not less than max {}", min, max),
        });
    }
    if value < min || value > max {
        return Err(CatalogError::invalid_range(
            field_name,
            format!(
                "{} must be between {} and {}",
                humanize_field_name(field_name),
                min,
                max
            ),
        ));
    }
    Ok(())
}

/// Checks a decimal literal such as `"12.50"` for its precision.
///
/// Trailing zeros in the fraction do not count, so `"1.120"` has two places.
pub fn validate_max_decimal_places(field_name: &str, value: &str, max_places: u32) -> Result<()> {
    if max_places > MAX_CHECKED_DECIMAL_PLACES {
        return Err(CatalogError::InvalidBounds {
            message: format!(
                "only up to {} decimal places can be checked",
                MAX_CHECKED_DECIMAL_PLACES
            ),
        });
    }

    let places = match value.split_once('.') {
        Some((_, fraction)) => fraction.trim_end_matches('0').chars().count(),
        None => 0,
    };
    if places > max_places as usize {
        return Err(CatalogError::invalid_range(
            field_name,
            format!(
                "{} has more than {} decimal places",
                humanize_field_name(field_name),
                max_places
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_humanize_field_name() {
        assert_eq!(humanize_field_name("value"), "The value");
        assert_eq!(humanize_field_name(""), "The value");
        assert_eq!(humanize_field_name("name"), "Name");
        assert_eq!(humanize_field_name("start_date"), "Start date");
        assert_eq!(humanize_field_name("courses.modules"), "Courses modules");
    }

    #[test]
    fn test_validate_required() {
        let present = Some(3);
        assert_eq!(*validate_required("duration", &present).unwrap(), 3);

        let absent: Option<u32> = None;
        let err = validate_required("duration", &absent).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullArgument);
    }

    #[test]
    fn test_validate_whitespace_rules() {
        assert!(validate_not_empty("name", "a").is_ok());
        assert!(validate_not_empty("name", "").is_err());
        assert!(validate_not_whitespace_only("name", " \t").is_err());
        assert!(validate_not_whitespace_only("name", " a ").is_ok());

        let err = validate_no_leading_or_trailing_whitespace("name", " a").unwrap_err();
        assert_eq!(err.to_string(), "Name begins with whitespace");
        let err = validate_no_leading_or_trailing_whitespace("name", "a\n").unwrap_err();
        assert_eq!(err.to_string(), "Name ends with whitespace");
        assert!(validate_no_leading_or_trailing_whitespace("name", "").is_ok());
    }

    #[test]
    fn test_validate_length() {
        assert!(validate_length("name", "ab", 2, 50).is_ok());
        assert!(validate_length("name", "a", 2, 50).is_err());
        assert!(validate_length("name", &"x".repeat(51), 2, 50).is_err());
        // Multi-byte characters count once.
        assert!(validate_length("name", "éé", 2, 3).is_ok());

        let err = validate_length("name", "abc", 5, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("duration", 1, 1, 365).is_ok());
        assert!(validate_range("duration", 365, 1, 365).is_ok());
        assert!(validate_range("duration", 0, 1, 365).is_err());
        assert!(validate_range("duration", 366, 1, 365).is_err());

        let err = validate_range("duration", 1, 10, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
    }

    #[test]
    fn test_validate_max_decimal_places() {
        assert!(validate_max_decimal_places("cost", "1", 2).is_ok());
        assert!(validate_max_decimal_places("cost", "1.1", 2).is_ok());
        assert!(validate_max_decimal_places("cost", "1.12", 2).is_ok());
        assert!(validate_max_decimal_places("cost", "1.120", 2).is_ok());
        assert!(validate_max_decimal_places("cost", "1.123", 2).is_err());
        assert!(validate_max_decimal_places("cost", "1.1", 11).is_err());
    }
}
