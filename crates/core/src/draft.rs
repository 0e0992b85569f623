//! The respondent's in-progress, unsaved answer set.

use crate::answers::QuestionAnswers;
use crate::questions::{
    parse_question_key, FIELD_AGE, FIELD_COMPANY_TYPE, FIELD_GENDER, FIELD_WORK_DURATION,
};

/// Transient per-session draft mirroring the persisted response shape,
/// with every field initialized empty.
///
/// Exclusively owned by the active form session; reset to the empty
/// initial shape on successful submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub company_type: String,
    pub gender: String,
    pub age: String,
    pub work_duration: String,
    pub answers: QuestionAnswers,
}

impl Draft {
    /// Set a field by its wire key (`companyType`, `gender`, `age`,
    /// `workDuration`, or `q1`..`q25`), as a form binding would.
    ///
    /// Returns `false` for unknown keys, leaving the draft unchanged.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match field {
            FIELD_COMPANY_TYPE => self.company_type = value.into(),
            FIELD_GENDER => self.gender = value.into(),
            FIELD_AGE => self.age = value.into(),
            FIELD_WORK_DURATION => self.work_duration = value.into(),
            _ => match parse_question_key(field) {
                Some(n) => self.answers.set(n, value),
                None => return false,
            },
        }
        true
    }

    /// Read a field by its wire key. `None` for unknown keys.
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            FIELD_COMPANY_TYPE => Some(&self.company_type),
            FIELD_GENDER => Some(&self.gender),
            FIELD_AGE => Some(&self.age),
            FIELD_WORK_DURATION => Some(&self.work_duration),
            _ => parse_question_key(field).map(|n| self.answers.get(n)),
        }
    }

    /// Restore the empty initial shape.
    pub fn reset(&mut self) {
        *self = Draft::default();
    }

    /// True when no field has been filled in yet.
    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_by_wire_key() {
        let mut draft = Draft::default();
        assert!(draft.set("companyType", "Private company"));
        assert!(draft.set("q3", "4"));
        assert_eq!(draft.company_type, "Private company");
        assert_eq!(draft.answers.get(3), "4");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut draft = Draft::default();
        assert!(!draft.set("q26", "1"));
        assert!(!draft.set("email", "x@y.z"));
        assert!(draft.is_empty());
    }

    #[test]
    fn get_mirrors_set() {
        let mut draft = Draft::default();
        draft.set("gender", "Female");
        draft.set("q25", "5");
        assert_eq!(draft.get("gender"), Some("Female"));
        assert_eq!(draft.get("q25"), Some("5"));
        assert_eq!(draft.get("bogus"), None);
    }

    #[test]
    fn reset_restores_empty_shape() {
        let mut draft = Draft::default();
        draft.set("age", "Under 20 years old");
        draft.set("q1", "1");
        draft.reset();
        assert!(draft.is_empty());
    }
}
