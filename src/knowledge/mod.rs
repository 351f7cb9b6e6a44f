//! Static knowledge base: an ordered list of topics, each pairing a set of
//! trigger keywords with one canned answer.
//!
//! The base is built once at startup and never mutated. Declaration order
//! is significant: the responder returns the answer of the *first* topic
//! whose keyword appears in a query, so `topics()` must iterate in the
//! order the topics were declared.

pub mod error;
mod topics;

pub use error::KnowledgeError;

use serde::{Deserialize, Serialize};

/// A labeled group of trigger keywords sharing one canned answer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Topic {
    /// Display label, shown on the preset button for this topic.
    pub label: String,
    /// Trigger keywords, stored lower-case, matched in declaration order.
    pub keywords: Vec<String>,
    /// The canned answer returned when any keyword matches.
    pub answer: String,
}

impl Topic {
    /// Create a topic from a label, keyword list, and answer.
    pub fn new<L, K, A>(label: L, keywords: K, answer: A) -> Self
    where
        L: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
        A: Into<String>,
    {
        Self {
            label: label.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// The keyword a preset button sends as its question, capitalized with
    /// a trailing question mark (e.g. `"tall"` becomes `"Tall?"`).
    #[must_use]
    pub fn button_question(&self) -> String {
        let Some(first) = self.keywords.first() else {
            return String::from("?");
        };
        let mut chars = first.chars();
        match chars.next() {
            Some(c) => format!("{}{}?", c.to_uppercase(), chars.as_str()),
            None => String::from("?"),
        }
    }
}

/// Ordered, read-only collection of [`Topic`] entries.
pub struct KnowledgeBase {
    topics: Vec<Topic>,
}

impl KnowledgeBase {
    /// Build a base from topics, validating the store invariants:
    /// at least one topic, non-blank keywords, unique labels.
    ///
    /// Keywords are lower-cased on ingest so lookup can stay a plain
    /// substring check against a lower-cased query.
    ///
    /// # Errors
    /// Returns a [`KnowledgeError`] describing the first violated invariant.
    pub fn from_topics(topics: Vec<Topic>) -> Result<Self, KnowledgeError> {
        if topics.is_empty() {
            return Err(KnowledgeError::EmptyBase);
        }

        let mut seen = std::collections::HashSet::new();
        let mut normalized = Vec::with_capacity(topics.len());
        for mut topic in topics {
            if topic.keywords.is_empty() {
                return Err(KnowledgeError::NoKeywords(topic.label));
            }
            if topic.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(KnowledgeError::BlankKeyword(topic.label));
            }
            if !seen.insert(topic.label.clone()) {
                return Err(KnowledgeError::DuplicateLabel(topic.label));
            }
            for keyword in &mut topic.keywords {
                *keyword = keyword.to_lowercase();
            }
            normalized.push(topic);
        }

        Ok(Self { topics: normalized })
    }

    /// The built-in Giza Plateau base: greetings, basics, construction
    /// facts, mysteries, and tourism topics.
    ///
    /// # Errors
    /// Returns a [`KnowledgeError`] if the literal violates an invariant
    /// (covered by tests; does not happen for the shipped content).
    pub fn giza() -> Result<Self, KnowledgeError> {
        Self::from_topics(topics::giza_topics())
    }

    /// Topics in declaration order.
    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Number of topics in the base.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether the base is empty (never true for a validated base).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Look up a topic by its exact label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_giza_base_is_valid() {
        let base = KnowledgeBase::giza();
        assert!(base.is_ok());
    }

    #[test]
    fn test_giza_base_has_all_topic_groups() -> Result<(), KnowledgeError> {
        let base = KnowledgeBase::giza()?;
        assert_eq!(base.len(), 21);
        assert!(base.get("📏 How tall is it?").is_some());
        assert!(base.get("🐪 Camel Rides").is_some());
        Ok(())
    }

    #[test]
    fn test_declaration_order_preserved() -> Result<(), KnowledgeError> {
        let base = KnowledgeBase::from_topics(vec![
            Topic::new("first", ["alpha"], "answer one"),
            Topic::new("second", ["beta"], "answer two"),
            Topic::new("third", ["gamma"], "answer three"),
        ])?;
        let labels: Vec<&str> = base.topics().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
        Ok(())
    }

    #[test]
    fn test_keywords_lowercased_on_ingest() -> Result<(), KnowledgeError> {
        let base = KnowledgeBase::from_topics(vec![Topic::new("t", ["SpHiNx"], "a")])?;
        assert_eq!(base.topics()[0].keywords[0], "sphinx");
        Ok(())
    }

    #[test]
    fn test_empty_base_rejected() {
        let err = KnowledgeBase::from_topics(vec![]);
        assert!(matches!(err, Err(KnowledgeError::EmptyBase)));
    }

    #[test]
    fn test_topic_without_keywords_rejected() {
        let keywords: Vec<String> = vec![];
        let err = KnowledgeBase::from_topics(vec![Topic::new("bad", keywords, "a")]);
        assert!(matches!(err, Err(KnowledgeError::NoKeywords(label)) if label == "bad"));
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let err = KnowledgeBase::from_topics(vec![Topic::new("bad", ["ok", "  "], "a")]);
        assert!(matches!(err, Err(KnowledgeError::BlankKeyword(label)) if label == "bad"));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = KnowledgeBase::from_topics(vec![
            Topic::new("dup", ["a"], "one"),
            Topic::new("dup", ["b"], "two"),
        ]);
        assert!(matches!(err, Err(KnowledgeError::DuplicateLabel(label)) if label == "dup"));
    }

    #[test]
    fn test_button_question_capitalizes_first_keyword() {
        let topic = Topic::new("t", ["tall", "height"], "a");
        assert_eq!(topic.button_question(), "Tall?");
    }
}
