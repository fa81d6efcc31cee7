//! Intent resolution.
//!
//! Maps a free-text question onto the knowledge base with plain substring
//! tests:
//!
//! 1. Lowercase the question.
//! 2. Take the first topic, in knowledge-base order, whose name occurs in it.
//! 3. Take the first field, in [`Field::PRIORITY`] order, with a keyword that
//!    occurs in it.
//!
//! Questions naming several topics resolve to the first one scanned. There is
//! no disambiguation and no error path: every input resolves to some reply.

use crate::constants::FALLBACK_RESPONSE;
use crate::knowledge::{Field, KnowledgeBase, Topic};

/// What a question resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A topic and one of its fields.
    Field { topic: &'static Topic, field: Field },
    /// A topic was named but no field keyword was found.
    TopicOnly { topic: &'static Topic },
    /// No known topic was named.
    Unknown,
}

impl Intent {
    /// Render the reply text for this intent.
    pub fn response(&self) -> String {
        match self {
            Intent::Field { topic, field } => topic.field(*field).to_string(),
            Intent::TopicOnly { topic } => format!(
                "I can tell you about {}: symptoms, prevention, or treatment.",
                topic.name
            ),
            Intent::Unknown => FALLBACK_RESPONSE.to_string(),
        }
    }
}

/// Resolve `input` against `kb`.
pub fn resolve_in(kb: &KnowledgeBase, input: &str) -> Intent {
    let input = input.to_lowercase();

    let Some(topic) = kb.topics().iter().find(|t| input.contains(t.name)) else {
        return Intent::Unknown;
    };

    Field::PRIORITY
        .into_iter()
        .find(|field| field.keywords().iter().any(|kw| input.contains(kw)))
        .map_or(Intent::TopicOnly { topic }, |field| Intent::Field {
            topic,
            field,
        })
}

/// Resolve `input` against the built-in knowledge base.
pub fn resolve(input: &str) -> Intent {
    resolve_in(&KnowledgeBase::builtin(), input)
}

/// Reply text for `input`, in English.
pub fn get_response(input: &str) -> String {
    resolve(input).response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(name: &str) -> &'static Topic {
        KnowledgeBase::builtin()
            .lookup(name)
            .expect("topic should exist")
    }

    #[test]
    fn test_symptoms_question_returns_symptoms_verbatim() {
        assert_eq!(
            get_response("what are the symptoms of dengue"),
            "High fever, severe headache, pain behind eyes, joint pain, rash."
        );
    }

    #[test]
    fn test_symptom_keyword_returns_symptoms_for_every_topic() {
        for t in KnowledgeBase::builtin().topics() {
            let question = format!("any symptom of {} I should know?", t.name);
            assert_eq!(get_response(&question), t.symptoms);
        }
    }

    #[test]
    fn test_unknown_topic_returns_fallback() {
        assert_eq!(get_response("tell me about flu"), FALLBACK_RESPONSE);
        assert_eq!(
            get_response("symptoms prevention treatment cure"),
            FALLBACK_RESPONSE
        );
        assert_eq!(get_response(""), FALLBACK_RESPONSE);
        assert!(FALLBACK_RESPONSE.starts_with("Sorry, I don"));
    }

    #[test]
    fn test_topic_without_keyword_returns_generic_prompt() {
        assert_eq!(
            get_response("Malaria"),
            "I can tell you about malaria: symptoms, prevention, or treatment."
        );
        assert_eq!(resolve("typhoid?"), Intent::TopicOnly { topic: topic("typhoid") });
    }

    #[test]
    fn test_symptoms_take_precedence_over_treatment() {
        assert_eq!(
            resolve("covid symptoms and treatment"),
            Intent::Field {
                topic: topic("covid"),
                field: Field::Symptoms
            }
        );
    }

    #[test]
    fn test_field_priority_order() {
        assert_eq!(
            get_response("how to avoid and cure typhoid"),
            topic("typhoid").prevention
        );
        assert_eq!(
            get_response("what medicine treats malaria"),
            topic("malaria").treatment
        );
        assert_eq!(get_response("info on dengue"), topic("dengue").about);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            get_response("HOW DO I PREVENT DENGUE"),
            topic("dengue").prevention
        );
    }

    #[test]
    fn test_first_topic_in_scan_order_wins() {
        // typhoid is named first in the text but dengue is scanned first.
        assert_eq!(
            resolve("typhoid or dengue symptoms"),
            Intent::Field {
                topic: topic("dengue"),
                field: Field::Symptoms
            }
        );
    }

    #[test]
    fn test_topic_matches_as_substring() {
        assert_eq!(
            get_response("covid-19 prevention"),
            topic("covid").prevention
        );
    }
}
