use crate::error::{Result, SearchError};
use std::collections::BTreeSet;

/// Split text into whitespace-delimited words
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// A word is valid when it carries no control characters
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(char::is_control)
}

pub fn check_words<'a, I>(words: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for word in words {
        if !is_valid_word(word) {
            return Err(SearchError::InvalidWord(word.to_string()));
        }
    }
    Ok(())
}

/// Set of words excluded from indexing and from queries
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a validated stop-word set
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = words.into_iter().collect();
        check_words(words.iter().map(|word| word.as_ref()))?;

        Ok(Self {
            words: words
                .iter()
                .map(|word| word.as_ref())
                .filter(|word| !word.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }

    /// Add every word of `text`; the set only ever grows
    pub fn extend_from_text(&mut self, text: &str) {
        self.words
            .extend(split_into_words(text).into_iter().map(str::to_string));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Split `text`, validate every word and drop the stop words
    pub fn analyze<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let words = split_into_words(text);
        check_words(words.iter().copied())?;
        Ok(words.into_iter().filter(|w| !self.contains(w)).collect())
    }
}
