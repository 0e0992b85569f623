//! Required-field validation — pure logic, no side effects.
//!
//! A draft is submit-ready when every one of the 29 required fields
//! (4 personal-information fields + 25 questions) is non-empty.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::draft::Draft;
use crate::questions::{
    question_key, FIELD_AGE, FIELD_COMPANY_TYPE, FIELD_GENDER, FIELD_WORK_DURATION, QUESTION_COUNT,
};

// ---------------------------------------------------------------------------
// Error messages
// ---------------------------------------------------------------------------

pub const MSG_COMPANY_TYPE: &str = "Please select a company type";
pub const MSG_GENDER: &str = "Please select your gender";
pub const MSG_AGE: &str = "Please select your age range";
pub const MSG_WORK_DURATION: &str = "Please select your work duration";
pub const MSG_QUESTION: &str = "Please select an answer";

// ---------------------------------------------------------------------------
// ValidationErrors
// ---------------------------------------------------------------------------

/// Field-keyed validation error messages, ordered by field key.
///
/// An empty mapping means the draft is submit-ready.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for a field, if that field failed validation.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Iterate `(field, message)` pairs in field-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "missing fields: {}", fields.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Check a draft against the required-field rules.
///
/// Produces one entry per empty required field — the full mapping,
/// never just the first failure. Pure and deterministic.
pub fn validate_draft(draft: &Draft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let personal: [(&str, &str, &str); 4] = [
        (FIELD_COMPANY_TYPE, draft.company_type.as_str(), MSG_COMPANY_TYPE),
        (FIELD_GENDER, draft.gender.as_str(), MSG_GENDER),
        (FIELD_AGE, draft.age.as_str(), MSG_AGE),
        (FIELD_WORK_DURATION, draft.work_duration.as_str(), MSG_WORK_DURATION),
    ];
    for (field, value, message) in personal {
        if value.is_empty() {
            errors.insert(field, message);
        }
    }

    for n in 1..=QUESTION_COUNT {
        if draft.answers.get(n).is_empty() {
            errors.insert(question_key(n), MSG_QUESTION);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> Draft {
        let mut draft = Draft::default();
        draft.set(FIELD_COMPANY_TYPE, "Private company");
        draft.set(FIELD_GENDER, "Male");
        draft.set(FIELD_AGE, "From 20 to 35 years old");
        draft.set(FIELD_WORK_DURATION, "Under 1 year");
        for n in 1..=QUESTION_COUNT {
            draft.set(&question_key(n), "3");
        }
        draft
    }

    #[test]
    fn empty_draft_fails_all_29_checks() {
        let errors = validate_draft(&Draft::default());
        assert_eq!(errors.len(), 29);
        assert_eq!(errors.get(FIELD_COMPANY_TYPE), Some(MSG_COMPANY_TYPE));
        assert_eq!(errors.get(FIELD_GENDER), Some(MSG_GENDER));
        assert_eq!(errors.get(FIELD_AGE), Some(MSG_AGE));
        assert_eq!(errors.get(FIELD_WORK_DURATION), Some(MSG_WORK_DURATION));
        for n in 1..=QUESTION_COUNT {
            assert_eq!(errors.get(&question_key(n)), Some(MSG_QUESTION));
        }
    }

    #[test]
    fn full_draft_passes() {
        let errors = validate_draft(&filled_draft());
        assert!(errors.is_empty());
    }

    #[test]
    fn exactly_the_missing_fields_are_reported() {
        let mut draft = filled_draft();
        draft.gender.clear();
        draft.answers.set(13, "");

        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(FIELD_GENDER));
        assert!(errors.contains("q13"));
        assert!(!errors.contains(FIELD_AGE));
        assert!(!errors.contains("q12"));
    }

    #[test]
    fn single_missing_question_is_keyed_by_wire_name() {
        let mut draft = filled_draft();
        draft.answers.set(25, "");
        let errors = validate_draft(&draft);
        assert_eq!(errors.iter().collect::<Vec<_>>(), vec![("q25", MSG_QUESTION)]);
    }

    #[test]
    fn display_lists_missing_fields() {
        let mut draft = filled_draft();
        draft.company_type.clear();
        let errors = validate_draft(&draft);
        assert_eq!(errors.to_string(), "missing fields: companyType");
    }
}
