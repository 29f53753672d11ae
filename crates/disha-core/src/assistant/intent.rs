//! Intent classification for user messages.
//!
//! An ordered list of (intent, trigger-set) rules evaluated top to bottom
//! with early exit -- a one-shot classification, not a state machine. The
//! catalog intents deliberately precede the greeting check so that
//! "hello, tell me about a course" is a course query, not a greeting.

use serde::{Deserialize, Serialize};

/// Classification bucket assigned to one user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Course,
    College,
    Career,
    Greeting,
    Fallback,
}

/// Trigger words, matched as case-insensitive substrings of the message.
///
/// Substring (not word-boundary) matching is preserved from the original
/// behavior: "understudy" triggers `Course` via "study". Flagged for
/// product review; do not change without pinning new test expectations.
const RULES: &[(Intent, &[&str])] = &[
    (Intent::Course, &["course", "program", "degree", "study"]),
    (
        Intent::College,
        &["college", "university", "institution", "school"],
    ),
    (
        Intent::Career,
        &["job", "career", "work", "profession", "salary", "opportunity"],
    ),
    (Intent::Greeting, &["hi", "hello", "hey", "greetings", "start"]),
];

/// Classify one free-text message. First matching rule wins.
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();
    for (intent, triggers) in RULES {
        if triggers.iter().any(|t| lower.contains(t)) {
            tracing::debug!(?intent, "message classified");
            return *intent;
        }
    }
    tracing::debug!("message did not match any intent rule");
    Intent::Fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_course_trigger_classifies_as_course() {
        for word in ["course", "program", "degree", "study"] {
            assert_eq!(classify(word), Intent::Course, "{word}");
        }
    }

    #[test]
    fn every_college_trigger_classifies_as_college() {
        for word in ["college", "university", "institution", "school"] {
            assert_eq!(classify(word), Intent::College, "{word}");
        }
    }

    #[test]
    fn every_career_trigger_classifies_as_career() {
        for word in ["job", "career", "work", "profession", "salary", "opportunity"] {
            assert_eq!(classify(word), Intent::Career, "{word}");
        }
    }

    #[test]
    fn every_greeting_trigger_classifies_as_greeting() {
        for word in ["hi", "hello", "hey", "greetings", "start"] {
            assert_eq!(classify(word), Intent::Greeting, "{word}");
        }
    }

    #[test]
    fn course_check_precedes_greeting_check() {
        assert_eq!(
            classify("hello, tell me about a course"),
            Intent::Course
        );
    }

    #[test]
    fn college_check_precedes_career_and_greeting() {
        assert_eq!(classify("hi, which university has good jobs?"), Intent::College);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("BEST DEGREE?"), Intent::Course);
        assert_eq!(classify("HeLLo"), Intent::Greeting);
    }

    #[test]
    fn substring_matching_is_preserved() {
        // "understudy" contains "study"; "think" contains "hi".
        assert_eq!(classify("understudy"), Intent::Course);
        assert_eq!(classify("think"), Intent::Greeting);
    }

    #[test]
    fn unmatched_text_falls_back() {
        assert_eq!(classify("what is the meaning of life?"), Intent::Fallback);
        assert_eq!(classify(""), Intent::Fallback);
    }
}
