//! Field validation rules for candidate answers.
//!
//! Every rule is pure and total: malformed input yields a rejection, never a
//! panic. Answers are judged after trimming surrounding whitespace, which is
//! also the form in which accepted values are stored.

use once_cell::sync::Lazy;
use regex::Regex;

use super::field::CandidateField;
use crate::domain::foundation::ValidationError;

/// Upper bound for declared years of experience.
pub const MAX_YEARS_OF_EXPERIENCE: u32 = 50;

/// Minimum number of phone characters after the optional `+`.
pub const MIN_PHONE_CHARS: usize = 7;

// Anchored at the start only: anything after the first `x@y.z` match is accepted.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^\+?[0-9\s\-()]{{{},}}$", MIN_PHONE_CHARS))
        .expect("phone pattern compiles")
});

/// Validates a raw answer against the rule for a field given by name.
///
/// Names outside the seven known fields fall back to the non-empty rule.
pub fn validate(field_name: &str, raw_value: &str) -> bool {
    match field_name.parse::<CandidateField>() {
        Ok(field) => validate_field(field, raw_value),
        Err(_) => !raw_value.trim().is_empty(),
    }
}

/// Validates a raw answer for a known field.
pub fn validate_field(field: CandidateField, raw_value: &str) -> bool {
    check_field(field, raw_value).is_ok()
}

/// Checks a raw answer and returns the value to store, or why it was rejected.
pub fn check_field(field: CandidateField, raw_value: &str) -> Result<String, ValidationError> {
    let value = raw_value.trim();
    let name = field.as_str();

    match field {
        CandidateField::Email => {
            if !EMAIL_PATTERN.is_match(value) {
                return Err(ValidationError::invalid_format(name, "expected name@domain.tld"));
            }
        }
        CandidateField::Phone => {
            if !PHONE_PATTERN.is_match(value) {
                return Err(ValidationError::invalid_format(
                    name,
                    "expected digits, spaces, hyphens or parentheses",
                ));
            }
        }
        CandidateField::YearsOfExperience => {
            if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
                return Err(ValidationError::invalid_format(name, "expected a whole number"));
            }
            let years: u32 = value.parse().map_err(|_| {
                ValidationError::out_of_range(name, 0, MAX_YEARS_OF_EXPERIENCE.into(), i64::MAX)
            })?;
            if years > MAX_YEARS_OF_EXPERIENCE {
                return Err(ValidationError::out_of_range(
                    name,
                    0,
                    MAX_YEARS_OF_EXPERIENCE.into(),
                    years.into(),
                ));
            }
        }
        CandidateField::TechStack => {
            if !value.split(',').any(|segment| !segment.trim().is_empty()) {
                return Err(ValidationError::empty_field(name));
            }
        }
        CandidateField::FullName
        | CandidateField::DesiredPosition
        | CandidateField::CurrentLocation => {
            if value.is_empty() {
                return Err(ValidationError::empty_field(name));
            }
        }
    }

    Ok(value.to_string())
}
