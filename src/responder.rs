//! First-match keyword lookup over the knowledge base.
//!
//! The responder is a pure, total function: every query produces exactly
//! one answer string, with a fixed fallback when nothing matches. There is
//! no ranking; the first topic (in declaration order) whose keyword occurs
//! in the query wins, and within a topic keywords are tried in order.

use crate::knowledge::{KnowledgeBase, Topic};

/// Answer returned when no trigger keyword matches the query.
pub const FALLBACK: &str =
    "I do not have that record in my hieroglyphs. Try using the buttons in the sidebar!";

/// Greeting seeded into every new conversation log.
pub const GREETING: &str = "Greetings! I am the Guardian of the Plateau. How may I assist you?";

/// Keyword-matching answer engine over an immutable [`KnowledgeBase`].
pub struct Responder {
    base: KnowledgeBase,
}

impl Responder {
    /// Wrap a validated knowledge base.
    #[must_use]
    pub const fn new(base: KnowledgeBase) -> Self {
        Self { base }
    }

    /// The underlying knowledge base.
    #[must_use]
    pub const fn base(&self) -> &KnowledgeBase {
        &self.base
    }

    /// Find the first topic whose keyword occurs in the query,
    /// case-insensitively.
    ///
    /// Keywords are stored lower-case, so a single lower-cased copy of the
    /// query is enough for case-insensitive containment checks.
    #[must_use]
    pub fn lookup(&self, query: &str) -> Option<&Topic> {
        let query = query.to_lowercase();
        self.base
            .topics()
            .iter()
            .find(|topic| topic.keywords.iter().any(|k| query.contains(k.as_str())))
    }

    /// Answer a free-text query.
    ///
    /// Total and deterministic: returns the matched topic's answer, or
    /// [`FALLBACK`] when no keyword matches (including the empty query).
    #[must_use]
    pub fn answer(&self, query: &str) -> &str {
        self.lookup(query).map_or(FALLBACK, |t| t.answer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{KnowledgeError, Topic};

    fn giza_responder() -> Responder {
        let base = KnowledgeBase::giza().unwrap_or_else(|_| unreachable!("shipped base is valid"));
        Responder::new(base)
    }

    #[test]
    fn test_keyword_match_returns_topic_answer() {
        let responder = giza_responder();
        let answer = responder.answer("How tall is it?");
        assert!(answer.starts_with("It was originally 146.6 meters"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let responder = giza_responder();
        let answer = responder.answer("IS IT MADE OF GRANITE?");
        assert!(answer.starts_with("The core is local limestone"));
    }

    #[test]
    fn test_camel_query_hits_tourism_topic() {
        let responder = giza_responder();
        let answer = responder.answer("Do you like camels?");
        assert!(answer.contains("ride camels or horses"));
    }

    #[test]
    fn test_no_match_falls_back() {
        let responder = giza_responder();
        assert_eq!(responder.answer("xyzzy unrelated nonsense"), FALLBACK);
    }

    #[test]
    fn test_empty_query_falls_back() {
        let responder = giza_responder();
        assert_eq!(responder.answer(""), FALLBACK);
        assert!(responder.lookup("").is_none());
    }

    #[test]
    fn test_answer_is_deterministic() {
        let responder = giza_responder();
        let first = responder.answer("how heavy is it").to_string();
        for _ in 0..3 {
            assert_eq!(responder.answer("how heavy is it"), first);
        }
    }

    // "cool" triggers both "🙏 Thank You" and "❄️ Air Conditioning?";
    // declaration order must decide.
    #[test]
    fn test_first_match_wins_across_topics() {
        let responder = giza_responder();
        let answer = responder.answer("cool");
        assert_eq!(answer, "You are most welcome. May your journey be full of discovery!");
    }

    #[test]
    fn test_first_match_wins_by_declaration_order() -> Result<(), KnowledgeError> {
        let base = KnowledgeBase::from_topics(vec![
            Topic::new("a", ["pyramid"], "answer a"),
            Topic::new("b", ["pyramid", "giza"], "answer b"),
        ])?;
        let responder = Responder::new(base);
        assert_eq!(responder.answer("the pyramid at giza"), "answer a");
        Ok(())
    }

    #[test]
    fn test_keyword_matches_as_substring() {
        let responder = giza_responder();
        // "tallest" contains "tall"
        let answer = responder.answer("is it the tallest building?");
        assert!(answer.starts_with("It was originally"));
    }

    #[test]
    fn test_lookup_reports_matched_topic() {
        let responder = giza_responder();
        let topic = responder.lookup("how much is a ticket");
        assert_eq!(topic.map(|t| t.label.as_str()), Some("🎟️ Ticket Cost"));
    }
}
