//! The persisted survey response entity.

use serde::{Deserialize, Serialize};

use crate::answers::QuestionAnswers;
use crate::draft::Draft;
use crate::types::Timestamp;

/// A single stored survey response.
///
/// Created exactly once at submit time and never mutated or deleted.
/// The wire shape matches the remote store's record format: camelCase
/// personal fields, `q1`..`q25` answer entries flattened alongside
/// them, an ISO-8601 `timestamp` string, and — only in the
/// authentication-enabled variant — the submitter's `userEmail`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub company_type: String,
    pub gender: String,
    pub age: String,
    pub work_duration: String,
    #[serde(flatten)]
    pub answers: QuestionAnswers,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

impl SurveyResponse {
    /// Build a record from a draft, stamping the write-time metadata.
    ///
    /// All draft fields are copied verbatim; the draft itself is left
    /// untouched (the caller resets it only after a successful write).
    pub fn from_draft(draft: &Draft, timestamp: Timestamp, user_email: Option<String>) -> Self {
        Self {
            company_type: draft.company_type.clone(),
            gender: draft.gender.clone(),
            age: draft.age.clone(),
            work_duration: draft.work_duration.clone(),
            answers: draft.answers.clone(),
            timestamp,
            user_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::questions::QUESTION_COUNT;

    fn sample_draft() -> Draft {
        let mut draft = Draft::default();
        draft.set("companyType", "Private company");
        draft.set("gender", "Male");
        draft.set("age", "From 20 to 35 years old");
        draft.set("workDuration", "Under 1 year");
        for n in 1..=QUESTION_COUNT {
            draft.set(&crate::questions::question_key(n), "3");
        }
        draft
    }

    #[test]
    fn from_draft_copies_all_fields() {
        let draft = sample_draft();
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let response = SurveyResponse::from_draft(&draft, ts, Some("a@b.c".into()));

        assert_eq!(response.company_type, "Private company");
        assert_eq!(response.work_duration, "Under 1 year");
        assert_eq!(response.answers, draft.answers);
        assert_eq!(response.timestamp, ts);
        assert_eq!(response.user_email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn wire_format_uses_camel_case_and_question_keys() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let response = SurveyResponse::from_draft(&sample_draft(), ts, Some("a@b.c".into()));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["companyType"], "Private company");
        assert_eq!(json["workDuration"], "Under 1 year");
        assert_eq!(json["q1"], "3");
        assert_eq!(json["q25"], "3");
        assert_eq!(json["userEmail"], "a@b.c");
        // ISO-8601 string at write time.
        assert!(json["timestamp"].as_str().unwrap().starts_with("2024-01-02T03:04:05"));
    }

    #[test]
    fn user_email_omitted_when_absent() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let response = SurveyResponse::from_draft(&sample_draft(), ts, None);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("userEmail").is_none());
    }

    #[test]
    fn wire_round_trip() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 7, 8, 9, 10).unwrap();
        let response = SurveyResponse::from_draft(&sample_draft(), ts, Some("a@b.c".into()));
        let json = serde_json::to_string(&response).unwrap();
        let back: SurveyResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
