use crate::error::{Result, SearchError};
use crate::tokenizer::{ensure_valid_word, is_valid_word, split_into_words, StopWords};
use std::collections::BTreeSet;

/// Parsed query: required ("plus") and excluded ("minus") terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

#[derive(Debug, PartialEq, Eq)]
struct QueryWord<'a> {
    data: &'a str,
    is_minus: bool,
    is_stop: bool,
}

fn parse_query_word<'a>(text: &'a str, stop_words: &StopWords) -> Result<QueryWord<'a>> {
    ensure_valid_word(text)?;
    let (data, is_minus) = match text.strip_prefix('-') {
        Some(rest) => {
            if rest.is_empty() || rest.starts_with('-') || !is_valid_word(rest) {
                return Err(SearchError::InvalidMinusWord(text.to_string()));
            }
            (rest, true)
        }
        None => (text, false),
    };
    Ok(QueryWord { data, is_minus, is_stop: stop_words.contains(data) })
}

impl Query {
    /// Parse raw query text. Stop words are dropped whether or not they carry a `-`.
    pub fn parse(text: &str, stop_words: &StopWords) -> Result<Self> {
        let mut query = Query::default();
        for word in split_into_words(text) {
            let qw = parse_query_word(word, stop_words)?;
            if qw.is_stop {
                continue;
            }
            if qw.is_minus {
                query.minus_words.insert(qw.data.to_string());
            } else {
                query.plus_words.insert(qw.data.to_string());
            }
        }
        tracing::debug!(plus = query.plus_words.len(), minus = query.minus_words.len(), "parsed query");
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop() -> StopWords {
        StopWords::from_text("и в на").unwrap()
    }

    #[test]
    fn splits_plus_and_minus_words() {
        let q = Query::parse("пушистый -кот пушистый", &stop()).unwrap();
        assert_eq!(q.plus_words.iter().collect::<Vec<_>>(), vec!["пушистый"]);
        assert_eq!(q.minus_words.iter().collect::<Vec<_>>(), vec!["кот"]);
    }

    #[test]
    fn minus_stop_word_is_dropped() {
        let q = Query::parse("-в кот", &stop()).unwrap();
        assert!(q.minus_words.is_empty());
        assert!(!q.plus_words.contains("в"));
        assert!(q.plus_words.contains("кот"));
    }

    #[test]
    fn rejects_malformed_minus_words() {
        assert_eq!(Query::parse("-", &stop()), Err(SearchError::InvalidMinusWord("-".into())));
        assert_eq!(Query::parse("кот --пёс", &stop()), Err(SearchError::InvalidMinusWord("--пёс".into())));
    }

    #[test]
    fn control_character_is_invalid_word() {
        let err = Query::parse("скво\x12рец", &stop()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidWord(_)));
        let err = Query::parse("-скво\x12рец", &stop()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidWord(_)));
    }
}
