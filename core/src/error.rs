use crate::DocId;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A stop word handed to the constructor contains a control character.
    #[error("stop word isn't correct: {0:?}")]
    InvalidStopWord(String),

    /// Negative id, or an id that is already indexed.
    #[error("document id isn't correct: {0}")]
    InvalidId(DocId),

    #[error("word isn't correct: {0:?}")]
    InvalidWord(String),

    /// Bare `-`, a double `--` prefix, or an invalid word after the `-`.
    #[error("minus word isn't correct: {0:?}")]
    InvalidMinusWord(String),

    #[error("document position {index} is out of range (document count is {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("document {0} is not indexed")]
    UnknownDocument(DocId),
}

impl SearchError {
    /// True for both lookup failures: by position and by unknown id.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, SearchError::IndexOutOfRange { .. } | SearchError::UnknownDocument(_))
    }
}
