//! Error types for knowledge base construction.

use thiserror::Error;

/// Errors that can occur while validating a knowledge base.
///
/// Lookup itself is total and never fails; these errors only surface at
/// construction time, before the base is shared with any responder.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// The base contains no topics at all.
    #[error("knowledge base has no topics")]
    EmptyBase,

    /// A topic was declared without any trigger keywords.
    #[error("topic '{0}' has no trigger keywords")]
    NoKeywords(String),

    /// A topic contains an empty or whitespace-only keyword.
    ///
    /// An empty keyword is a substring of every query, which would make
    /// its topic shadow everything declared after it.
    #[error("topic '{0}' contains a blank keyword")]
    BlankKeyword(String),

    /// Two topics share the same label.
    #[error("duplicate topic label '{0}'")]
    DuplicateLabel(String),
}

impl KnowledgeError {
    /// Label of the offending topic, where one exists.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::EmptyBase => None,
            Self::NoKeywords(label) | Self::BlankKeyword(label) | Self::DuplicateLabel(label) => {
                Some(label)
            }
        }
    }
}
