//! Candidate profile fields and the data collected for them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the seven candidate profile attributes.
///
/// Declaration order is collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateField {
    FullName,
    Email,
    Phone,
    YearsOfExperience,
    DesiredPosition,
    CurrentLocation,
    TechStack,
}

impl CandidateField {
    /// All fields in collection order.
    pub const ALL: [CandidateField; 7] = [
        CandidateField::FullName,
        CandidateField::Email,
        CandidateField::Phone,
        CandidateField::YearsOfExperience,
        CandidateField::DesiredPosition,
        CandidateField::CurrentLocation,
        CandidateField::TechStack,
    ];

    /// Position of this field in collection order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Machine name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::YearsOfExperience => "years_of_experience",
            Self::DesiredPosition => "desired_position",
            Self::CurrentLocation => "current_location",
            Self::TechStack => "tech_stack",
        }
    }

    /// Human readable label for operator display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::YearsOfExperience => "Years Of Experience",
            Self::DesiredPosition => "Desired Position",
            Self::CurrentLocation => "Current Location",
            Self::TechStack => "Tech Stack",
        }
    }

    /// The question the assistant asks to collect this field.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::FullName => "May I have your full name?",
            Self::Email => "What's your email address?",
            Self::Phone => "Could you share your phone number?",
            Self::YearsOfExperience => "How many years of professional experience do you have?",
            Self::DesiredPosition => "What position(s) are you interested in?",
            Self::CurrentLocation => "Where are you currently located?",
            Self::TechStack => "Please list your technical skills (e.g., Python, React, SQL):",
        }
    }

    /// The message shown when an answer for this field is rejected.
    pub fn invalid_input_message(&self) -> &'static str {
        match self {
            Self::Email => "Please enter a valid email address (e.g., name@example.com).",
            Self::Phone => "Please enter a valid phone number.",
            Self::YearsOfExperience => "Please enter a number between 0 and 50.",
            Self::TechStack => "Please list at least one technology.",
            Self::FullName | Self::DesiredPosition | Self::CurrentLocation => {
                "Please provide a valid input."
            }
        }
    }
}

impl fmt::Display for CandidateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("field", format!("unknown field '{}'", s)))
    }
}

/// Values gathered for each candidate field.
///
/// Every field starts unset. A field is written at most once: the first
/// accepted value sticks for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedData {
    values: [Option<String>; 7],
}

impl CollectedData {
    /// Creates an empty record with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value for a field, if any.
    pub fn get(&self, field: CandidateField) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// Returns true if the field already has a value.
    pub fn is_set(&self, field: CandidateField) -> bool {
        self.values[field.index()].is_some()
    }

    /// Stores a value unless the field was already set.
    ///
    /// Returns true if the value was stored.
    pub fn record(&mut self, field: CandidateField, value: impl Into<String>) -> bool {
        let slot = &mut self.values[field.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(value.into());
        true
    }

    /// The first field in collection order that has no value yet.
    pub fn next_unset(&self) -> Option<CandidateField> {
        CandidateField::ALL
            .into_iter()
            .find(|field| !self.is_set(*field))
    }

    /// Returns true once every field has been collected.
    pub fn is_complete(&self) -> bool {
        self.next_unset().is_none()
    }

    /// Fields with non-empty values, in collection order.
    pub fn filled(&self) -> impl Iterator<Item = (CandidateField, &str)> + '_ {
        CandidateField::ALL.into_iter().filter_map(move |field| {
            self.get(field)
                .filter(|value| !value.is_empty())
                .map(|value| (field, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod candidate_field {
        use super::*;

        #[test]
        fn all_is_in_collection_order() {
            let names: Vec<_> = CandidateField::ALL.iter().map(|f| f.as_str()).collect();
            assert_eq!(
                names,
                vec![
                    "full_name",
                    "email",
                    "phone",
                    "years_of_experience",
                    "desired_position",
                    "current_location",
                    "tech_stack",
                ]
            );
        }

        #[test]
        fn index_matches_position_in_all() {
            for (i, field) in CandidateField::ALL.iter().enumerate() {
                assert_eq!(field.index(), i);
            }
        }

        #[test]
        fn parses_from_machine_name() {
            for field in CandidateField::ALL {
                assert_eq!(field.as_str().parse::<CandidateField>(), Ok(field));
            }
        }

        #[test]
        fn rejects_unknown_name() {
            assert!("salary".parse::<CandidateField>().is_err());
        }

        #[test]
        fn fields_without_dedicated_error_share_generic_message() {
            assert_eq!(
                CandidateField::FullName.invalid_input_message(),
                "Please provide a valid input."
            );
            assert_eq!(
                CandidateField::Email.invalid_input_message(),
                "Please enter a valid email address (e.g., name@example.com)."
            );
        }

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&CandidateField::YearsOfExperience).unwrap();
            assert_eq!(json, "\"years_of_experience\"");
        }
    }

    mod collected_data {
        use super::*;

        #[test]
        fn starts_with_every_field_unset() {
            let data = CollectedData::new();
            assert!(CandidateField::ALL.iter().all(|f| !data.is_set(*f)));
            assert_eq!(data.next_unset(), Some(CandidateField::FullName));
        }

        #[test]
        fn first_write_wins() {
            let mut data = CollectedData::new();
            assert!(data.record(CandidateField::Email, "a@b.c"));
            assert!(!data.record(CandidateField::Email, "x@y.z"));
            assert_eq!(data.get(CandidateField::Email), Some("a@b.c"));
        }

        #[test]
        fn next_unset_follows_declared_order() {
            let mut data = CollectedData::new();
            data.record(CandidateField::FullName, "Jane");
            data.record(CandidateField::Phone, "5551234");
            assert_eq!(data.next_unset(), Some(CandidateField::Email));
        }

        #[test]
        fn complete_when_all_fields_set() {
            let mut data = CollectedData::new();
            for field in CandidateField::ALL {
                data.record(field, "x");
            }
            assert!(data.is_complete());
            assert_eq!(data.next_unset(), None);
        }

        #[test]
        fn filled_skips_unset_fields() {
            let mut data = CollectedData::new();
            data.record(CandidateField::CurrentLocation, "Lisbon");
            data.record(CandidateField::FullName, "Jane");
            let filled: Vec<_> = data.filled().collect();
            assert_eq!(
                filled,
                vec![
                    (CandidateField::FullName, "Jane"),
                    (CandidateField::CurrentLocation, "Lisbon"),
                ]
            );
        }
    }
}
