//! Input validation for day planning requests.
//!
//! Checks a request before any allocation runs. Detects:
//! - Requests with nothing to plan (no sleep window, appointments, or to-dos)
//! - To-dos with a zero duration
//! - Blank titles
//!
//! Time strings are already checked when a request is parsed, so every
//! `ClockTime` reaching this module is a valid minute of day.

use crate::scheduler::DayRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No sleep window was confirmed and there are no items to place.
    IncompleteInput,
    /// A to-do requests zero minutes.
    NonPositiveDuration,
    /// An appointment or to-do has an empty title.
    EmptyTitle,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a planning request.
///
/// Checks:
/// 1. At least one of: a confirmed sleep window, a fixed appointment, a to-do
/// 2. Every fixed appointment has a non-blank title
/// 3. Every to-do has a non-blank title and a positive duration
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &DayRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.sleep.is_none() && request.fixed.is_empty() && request.todos.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::IncompleteInput,
            "confirm a sleep window or add at least one appointment or to-do",
        ));
    }

    for (i, appt) in request.fixed.iter().enumerate() {
        if appt.title.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTitle,
                format!(
                    "Fixed appointment #{} ({}-{}) has no title",
                    i + 1,
                    appt.start,
                    appt.end
                ),
            ));
        }
    }

    for (i, todo) in request.todos.iter().enumerate() {
        if todo.title.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTitle,
                format!("To-do #{} has no title", i + 1),
            ));
        }
        if todo.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!("To-do '{}' must take at least one minute", todo.title),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FixedAppointment, TimeRange, TodoItem};

    fn sleep() -> TimeRange {
        TimeRange::parse("23:00", "07:00").unwrap()
    }

    #[test]
    fn test_valid_request() {
        let request = DayRequest::new()
            .with_sleep(sleep())
            .with_fixed(FixedAppointment::parse("09:00", "10:00", "class").unwrap())
            .with_todo(TodoItem::new("study", 120));
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_sleep_only_is_enough() {
        let request = DayRequest::new().with_sleep(sleep());
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_items_without_sleep_are_enough() {
        let request = DayRequest::new().with_todo(TodoItem::new("study", 60));
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_incomplete_input() {
        let errors = validate_request(&DayRequest::new()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::IncompleteInput);
    }

    #[test]
    fn test_zero_duration() {
        let request = DayRequest::new().with_todo(TodoItem::new("nothing", 0));
        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveDuration
                && e.message.contains("nothing")));
    }

    #[test]
    fn test_empty_titles() {
        let request = DayRequest::new()
            .with_fixed(FixedAppointment::parse("09:00", "10:00", "  ").unwrap())
            .with_todo(TodoItem::new("", 30));
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::EmptyTitle)
                .count(),
            2
        );
    }

    #[test]
    fn test_multiple_errors() {
        let request = DayRequest::new().with_todo(TodoItem::new("", 0));
        let errors = validate_request(&request).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
