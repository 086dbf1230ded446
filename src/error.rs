use thiserror::Error;

/// Result type returned by every fallible operation of the search core.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Coarse classification of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a malformed id, word or query.
    InvalidInput,
    /// A positional index or document id does not exist.
    OutOfRange,
}

/// Errors raised by the search core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("document id {0} must not be negative")]
    NegativeDocumentId(i32),

    #[error("document id {0} already exists")]
    DuplicateDocumentId(i32),

    #[error("invalid word: {0:?}")]
    InvalidWord(String),

    #[error("invalid query word: {0:?}")]
    InvalidQueryWord(String),

    #[error("document index {index} is out of range (document count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("document id {0} not found")]
    DocumentNotFound(i32),
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::NegativeDocumentId(_)
            | SearchError::DuplicateDocumentId(_)
            | SearchError::InvalidWord(_)
            | SearchError::InvalidQueryWord(_) => ErrorKind::InvalidInput,
            SearchError::IndexOutOfRange { .. } | SearchError::DocumentNotFound(_) => ErrorKind::OutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(SearchError::NegativeDocumentId(-1).kind(), ErrorKind::InvalidInput);
        assert_eq!(SearchError::InvalidQueryWord("-".into()).kind(), ErrorKind::InvalidInput);
        assert_eq!(
            SearchError::IndexOutOfRange { index: 3, count: 1 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(SearchError::DocumentNotFound(7).kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SearchError::DuplicateDocumentId(4).to_string(),
            "document id 4 already exists"
        );
        assert_eq!(
            SearchError::InvalidWord("al\u{12}pha".into()).to_string(),
            "invalid word: \"al\\u{12}pha\""
        );
    }
}
