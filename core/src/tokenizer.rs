use crate::error::{Result, SearchError};
use std::collections::BTreeSet;

/// Split text on the space character, dropping empty pieces.
///
/// Other whitespace (tabs, newlines) is not a separator: those are control
/// characters and are caught by [`is_valid_word`].
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

/// A word is valid when it has no control characters in `0x00..=0x1F`.
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| c < ' ')
}

pub(crate) fn ensure_valid_word(word: &str) -> Result<()> {
    if is_valid_word(word) {
        Ok(())
    } else {
        Err(SearchError::InvalidWord(word.to_string()))
    }
}

/// Validated, immutable stop-word set.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(word) {
                return Err(SearchError::InvalidStopWord(word.to_string()));
            }
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(split_into_words(text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Tokenize document text: validate every word, then drop stop words.
pub fn tokenize<'a>(text: &'a str, stop_words: &StopWords) -> Result<Vec<&'a str>> {
    let mut tokens = Vec::new();
    for word in split_into_words(text) {
        ensure_valid_word(word)?;
        if !stop_words.contains(word) {
            tokens.push(word);
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let stop = StopWords::from_text("и в на").unwrap();
        let t = tokenize("пушистый кот  и пушистый хвост", &stop).unwrap();
        assert_eq!(t, vec!["пушистый", "кот", "пушистый", "хвост"]);
    }

    #[test]
    fn tab_is_a_control_character() {
        assert!(!is_valid_word("one\ttwo"));
        assert_eq!(split_into_words("one\ttwo"), vec!["one\ttwo"]);
    }
}
