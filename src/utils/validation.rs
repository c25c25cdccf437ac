use crate::utils::error::{JsonError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(JsonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Every entry must be a usable object key; duplicates are rejected.
pub fn validate_field_names(field_name: &str, fields: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(fields.len());

    for field in fields {
        validate_non_empty_string(field_name, field)?;
        if !seen.insert(field.as_str()) {
            return Err(JsonError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: field.clone(),
                reason: "Duplicate field name".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "summary").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_field_names() {
        let fields = vec!["id".to_string(), "name".to_string()];
        assert!(validate_field_names("fields", &fields).is_ok());
        assert!(validate_field_names("fields", &[]).is_ok());

        let blank = vec!["id".to_string(), " ".to_string()];
        assert!(validate_field_names("fields", &blank).is_err());

        let duplicated = vec!["id".to_string(), "id".to_string()];
        match validate_field_names("fields", &duplicated) {
            Err(JsonError::InvalidConfigValueError { value, .. }) => assert_eq!(value, "id"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
