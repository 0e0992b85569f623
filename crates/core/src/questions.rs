//! Static question catalog and form field constants.
//!
//! The survey has two parts: four personal-information fields and 25
//! Likert-scale questions. Field keys match the persisted wire format.

/// Number of Likert-scale questions.
pub const QUESTION_COUNT: usize = 25;

// ---------------------------------------------------------------------------
// Personal-information field keys
// ---------------------------------------------------------------------------

pub const FIELD_COMPANY_TYPE: &str = "companyType";
pub const FIELD_GENDER: &str = "gender";
pub const FIELD_AGE: &str = "age";
pub const FIELD_WORK_DURATION: &str = "workDuration";

/// The four personal-information field keys, in form order.
pub const PERSONAL_FIELDS: &[&str] = &[
    FIELD_COMPANY_TYPE,
    FIELD_GENDER,
    FIELD_AGE,
    FIELD_WORK_DURATION,
];

// ---------------------------------------------------------------------------
// Answer option lists
// ---------------------------------------------------------------------------

/// Valid answers for the company-type field.
pub const COMPANY_TYPES: &[&str] = &[
    "State-owned company",
    "Private company",
    "Foreign company",
];

/// Valid answers for the gender field.
pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

/// Valid answers for the age field (ordinal ranges).
pub const AGE_RANGES: &[&str] = &[
    "Under 20 years old",
    "From 20 to 35 years old",
    "From 36 to 50 years old",
    "Over 50 years old",
];

/// Valid answers for the work-duration field (ordinal ranges).
pub const WORK_DURATIONS: &[&str] = &[
    "Under 1 year",
    "From 1 year to 3 years",
    "From 3 years to 5 years",
    "Over 5 years",
];

/// Valid Likert answers, stored as text.
/// 1 = Strongly Disagree … 5 = Strongly Agree.
pub const LIKERT_VALUES: &[&str] = &["1", "2", "3", "4", "5"];

// ---------------------------------------------------------------------------
// Question catalog
// ---------------------------------------------------------------------------

/// Full prompt text for each Likert question, indexed 0..24 for
/// questions 1..25.
const QUESTION_TEXTS: [&str; QUESTION_COUNT] = [
    "Your leader allocates time guiding and mentoring you.",
    "Your leader regards you as a unique person, not merely a subordinate.",
    "Your leader recognizes and accommodates your varied needs, abilities, and aspirations.",
    "Your leader supports you in developing your strengths.",
    "Your leader expresses optimism about the future.",
    "Your leader talks enthusiastically about what needs to be achieved.",
    "Your leader conveys a persuasive and inspiring vision of the future.",
    "Your leader displays confidence that goals will be achieved.",
    "Your leader re-examines critical assumptions to validate their appropriateness.",
    "Your leader seeks different viewpoints when addressing challenges.",
    "Your leader encourages you to analyze problems from diverse perspectives.",
    "Your leader introduces new approaches in completing assignments.",
    "Your leader talks about his/her core beliefs and values that are personally significant.",
    "Your leader identifies the necessity of having a strong sense of purpose and mission.",
    "Your leader considers the ethical and moral consequences of decisions.",
    "Your leader values the importance of having a collective sense of mission.",
    "Your leader instills pride and a sense of respect for being associated with him/her.",
    "Your leader prioritizes the sake of the organization above personal interests.",
    "Your leader acts in ways that build your admiration, respect, and trust.",
    "Your leader portrays a sense of power and confidence.",
    "You are contented with your current job.",
    "You are enthusiastic and dedicated to your job.",
    "You feel that your working hours pass quickly.",
    "You find your current job to be a good fit for you.",
    "You find your job interesting.",
];

/// Full prompt text for question `n` (1-based).
///
/// # Panics
///
/// Panics if `n` is 0 or greater than [`QUESTION_COUNT`]; the catalog
/// is fixed and an out-of-range index is a programmer error.
pub fn question_text(n: usize) -> &'static str {
    assert!(
        (1..=QUESTION_COUNT).contains(&n),
        "question index {n} out of range 1..={QUESTION_COUNT}"
    );
    QUESTION_TEXTS[n - 1]
}

/// Wire key for question `n`, e.g. `q7`.
pub fn question_key(n: usize) -> String {
    format!("q{n}")
}

/// Parse a `qN` wire key back into a 1-based question index.
///
/// Returns `None` for anything that is not `q1`..`q25`.
pub fn parse_question_key(key: &str) -> Option<usize> {
    let n: usize = key.strip_prefix('q')?.parse().ok()?;
    (1..=QUESTION_COUNT).contains(&n).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_questions() {
        for n in 1..=QUESTION_COUNT {
            assert!(!question_text(n).is_empty());
        }
    }

    #[test]
    fn first_and_last_question_text() {
        assert_eq!(
            question_text(1),
            "Your leader allocates time guiding and mentoring you."
        );
        assert_eq!(question_text(25), "You find your job interesting.");
    }

    #[test]
    #[should_panic]
    fn question_zero_panics() {
        question_text(0);
    }

    #[test]
    fn question_key_round_trip() {
        for n in 1..=QUESTION_COUNT {
            assert_eq!(parse_question_key(&question_key(n)), Some(n));
        }
    }

    #[test]
    fn parse_rejects_bad_keys() {
        assert_eq!(parse_question_key("q0"), None);
        assert_eq!(parse_question_key("q26"), None);
        assert_eq!(parse_question_key("gender"), None);
        assert_eq!(parse_question_key("qx"), None);
        assert_eq!(parse_question_key(""), None);
    }

    #[test]
    fn option_list_sizes() {
        assert_eq!(COMPANY_TYPES.len(), 3);
        assert_eq!(GENDERS.len(), 3);
        assert_eq!(AGE_RANGES.len(), 4);
        assert_eq!(WORK_DURATIONS.len(), 4);
        assert_eq!(LIKERT_VALUES.len(), 5);
    }
}
