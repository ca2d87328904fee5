//! Input validation utilities

use crate::error::{AppError, AppResult};

/// True when the value is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Reject blank required fields, naming the first offender
pub fn require_filled(fields: &[(&str, &str)]) -> AppResult<()> {
    match fields.iter().find(|(_, value)| is_blank(value)) {
        Some((name, _)) => Err(AppError::Validation(format!("{} must not be blank", name))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_require_filled() {
        assert!(require_filled(&[("email", "a@b.com"), ("password", "x")]).is_ok());

        let err = require_filled(&[("email", "a@b.com"), ("password", "  ")]).unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "password must not be blank"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
