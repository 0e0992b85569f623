//! The 25-slot Likert answer set and its `q1`..`q25` wire mapping.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::questions::{parse_question_key, question_key, QUESTION_COUNT};

/// Answers to the 25 Likert questions, indexed 1-based.
///
/// An empty string means "not yet answered". On the wire this is a flat
/// map of `q1`..`q25` string entries, flattened into the surrounding
/// record, matching the persisted format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionAnswers([String; QUESTION_COUNT]);

impl QuestionAnswers {
    /// The stored answer for question `n` (1-based); empty if unanswered.
    ///
    /// # Panics
    ///
    /// Panics if `n` is out of range, same as
    /// [`question_text`](crate::questions::question_text).
    pub fn get(&self, n: usize) -> &str {
        assert!(
            (1..=QUESTION_COUNT).contains(&n),
            "question index {n} out of range 1..={QUESTION_COUNT}"
        );
        &self.0[n - 1]
    }

    /// Set the answer for question `n` (1-based).
    pub fn set(&mut self, n: usize, value: impl Into<String>) {
        assert!(
            (1..=QUESTION_COUNT).contains(&n),
            "question index {n} out of range 1..={QUESTION_COUNT}"
        );
        self.0[n - 1] = value.into();
    }

    /// Iterate answers in question order 1..25.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True when every question has a non-empty answer.
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|a| !a.is_empty())
    }
}

impl Default for QuestionAnswers {
    fn default() -> Self {
        Self(std::array::from_fn(|_| String::new()))
    }
}

impl Serialize for QuestionAnswers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(QUESTION_COUNT))?;
        for (i, answer) in self.0.iter().enumerate() {
            map.serialize_entry(&question_key(i + 1), answer)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QuestionAnswers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AnswerVisitor;

        impl<'de> Visitor<'de> for AnswerVisitor {
            type Value = QuestionAnswers;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with q1..q25 answer entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut answers = QuestionAnswers::default();
                while let Some(key) = map.next_key::<String>()? {
                    match parse_question_key(&key) {
                        Some(n) => {
                            let value: String = map.next_value()?;
                            answers.set(n, value);
                        }
                        // Flattening hands us every leftover key; skip
                        // anything that is not a question entry.
                        None => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(answers)
            }
        }

        deserializer.deserialize_map(AnswerVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(value: &str) -> QuestionAnswers {
        let mut answers = QuestionAnswers::default();
        for n in 1..=QUESTION_COUNT {
            answers.set(n, value);
        }
        answers
    }

    #[test]
    fn default_is_incomplete() {
        let answers = QuestionAnswers::default();
        assert!(!answers.is_complete());
        assert_eq!(answers.get(1), "");
        assert_eq!(answers.get(25), "");
    }

    #[test]
    fn set_and_get() {
        let mut answers = QuestionAnswers::default();
        answers.set(7, "4");
        assert_eq!(answers.get(7), "4");
        assert_eq!(answers.get(8), "");
    }

    #[test]
    fn complete_after_filling_all() {
        assert!(filled("3").is_complete());
    }

    #[test]
    fn serializes_to_question_keys() {
        let mut answers = filled("3");
        answers.set(2, "5");
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["q1"], "3");
        assert_eq!(json["q2"], "5");
        assert_eq!(json["q25"], "3");
        assert_eq!(json.as_object().unwrap().len(), QUESTION_COUNT);
    }

    #[test]
    fn deserializes_ignoring_unknown_keys() {
        let json = serde_json::json!({
            "q1": "1",
            "q25": "5",
            "somethingElse": "ignored"
        });
        let answers: QuestionAnswers = serde_json::from_value(json).unwrap();
        assert_eq!(answers.get(1), "1");
        assert_eq!(answers.get(25), "5");
        assert_eq!(answers.get(2), "");
    }

    #[test]
    fn round_trip() {
        let answers = filled("2");
        let json = serde_json::to_string(&answers).unwrap();
        let back: QuestionAnswers = serde_json::from_str(&json).unwrap();
        assert_eq!(back, answers);
    }
}
