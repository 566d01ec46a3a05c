//! Goal form validation logic.

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::form::{GoalForm, Sense};

/// Fields longer than this many characters get a warning.
pub const LONG_FIELD_CHARS: usize = 200;

/// Validates a goal form and returns a validation result.
///
/// Every field is required. The dominant sense must be one of the six sense
/// labels. A profit goal without digits and very long fields only produce
/// warnings.
///
/// # Example
/// ```
/// use manifesto_goal::{validate_form, GoalForm};
///
/// let result = validate_form(&GoalForm::example());
/// assert!(result.is_ok());
/// ```
pub fn validate_form(form: &GoalForm) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_required(form, &mut result);
    validate_sense(form, &mut result);

    // Warnings
    check_profit_goal(form, &mut result);
    check_lengths(form, &mut result);

    result
}

fn validate_required(form: &GoalForm, result: &mut ValidationResult) {
    for (name, value) in form.fields() {
        if value.trim().is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::EmptyField,
                format!("{} must not be empty", name),
                name,
            ));
        }
    }
}

fn validate_sense(form: &GoalForm, result: &mut ValidationResult) {
    // Emptiness is already reported
    if form.dominant_sense.trim().is_empty() {
        return;
    }
    if form.sense().is_none() {
        let allowed: Vec<&str> = Sense::ALL.iter().map(Sense::as_str).collect();
        result.add_error(ValidationError::with_path(
            ErrorCode::UnknownSense,
            format!(
                "dominant sense '{}' must be one of: {}",
                form.dominant_sense,
                allowed.join(", ")
            ),
            "dominantSense",
        ));
    }
}

fn check_profit_goal(form: &GoalForm, result: &mut ValidationResult) {
    let goal = form.profit_goal.trim();
    if !goal.is_empty() && !goal.chars().any(|c| c.is_ascii_digit()) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::ProfitGoalNotNumeric,
            format!("profit goal '{}' contains no digits", goal),
            "profitGoal",
        ));
    }
}

fn check_lengths(form: &GoalForm, result: &mut ValidationResult) {
    for (name, value) in form.fields() {
        let chars = value.chars().count();
        if chars > LONG_FIELD_CHARS {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::LongField,
                format!(
                    "{} is {} characters long (over {})",
                    name, chars, LONG_FIELD_CHARS
                ),
                name,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_example_is_valid() {
        let result = validate_form(&GoalForm::example());
        assert!(result.is_ok());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let result = validate_form(&GoalForm::default());
        assert!(result.is_err());
        assert_eq!(result.errors.len(), 14);
        assert!(result
            .errors
            .iter()
            .all(|e| e.code == ErrorCode::EmptyField));
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut form = GoalForm::example();
        form.location = "   ".to_string();
        let result = validate_form(&form);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path.as_deref(), Some("location"));
    }

    #[test]
    fn test_unknown_sense() {
        let mut form = GoalForm::example();
        form.dominant_sense = "Sight".to_string();
        let result = validate_form(&form);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, ErrorCode::UnknownSense);
        assert!(result.errors[0].message.contains("Nhìn"));
    }

    #[test]
    fn test_empty_sense_reported_once() {
        let mut form = GoalForm::example();
        form.dominant_sense = String::new();
        let result = validate_form(&form);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, ErrorCode::EmptyField);
    }

    #[test]
    fn test_profit_goal_without_digits_warns() {
        let mut form = GoalForm::example();
        form.profit_goal = "sáu mươi triệu".to_string();
        let result = validate_form(&form);
        assert!(result.is_ok());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, WarningCode::ProfitGoalNotNumeric);
    }

    #[test]
    fn test_long_field_warns() {
        let mut form = GoalForm::example();
        form.congratulators = "ồ".repeat(LONG_FIELD_CHARS + 1);
        let result = validate_form(&form);
        assert!(result.is_ok());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].path.as_deref(), Some("congratulators"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut form = GoalForm::example();
        // 200 multi-byte characters is still within the limit
        form.location = "ồ".repeat(LONG_FIELD_CHARS);
        assert!(validate_form(&form).warnings.is_empty());
    }
}
