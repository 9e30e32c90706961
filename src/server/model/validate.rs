//! Field checks shared by the params `from_dto` conversions.
//!
//! Every failure is an `AppError::Validation` naming the field, which maps to 422.

use crate::server::error::AppError;

pub fn length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}

pub fn min_length(field: &str, value: &str, min: usize) -> Result<(), AppError> {
    if value.chars().count() < min {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

pub fn positive(field: &str, value: f64) -> Result<(), AppError> {
    if !(value > 0.0) {
        return Err(AppError::Validation(format!(
            "{} must be greater than 0",
            field
        )));
    }
    Ok(())
}

pub fn non_negative(field: &str, value: f64) -> Result<(), AppError> {
    if !(value >= 0.0) {
        return Err(AppError::Validation(format!(
            "{} must be greater than or equal to 0",
            field
        )));
    }
    Ok(())
}

pub fn in_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), AppError> {
    if value < min || value > max {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(())
}

/// Accepts `local@domain.tld` shaped addresses; deliverability is not checked.
pub fn email(field: &str, value: &str) -> Result<(), AppError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
        }
        None => false,
    };

    if !valid {
        return Err(AppError::Validation(format!(
            "{} is not a valid email address",
            field
        )));
    }
    Ok(())
}
