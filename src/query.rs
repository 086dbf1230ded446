use crate::error::{Result, SearchError};
use crate::tokenizer::{is_valid_word, split_into_words, StopWords};
use std::collections::BTreeSet;

/// Prefix that turns a query word into an exclusion
pub const MINUS_WORD_PREFIX: char = '-';

/// A single parsed query word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWord<'a> {
    pub data: &'a str,
    pub is_minus: bool,
    pub is_stop: bool,
}

impl<'a> QueryWord<'a> {
    pub fn parse(text: &'a str, stop_words: &StopWords) -> Result<Self> {
        let (data, is_minus) = match text.strip_prefix(MINUS_WORD_PREFIX) {
            Some(rest) => (rest, true),
            None => (text, false),
        };

        if data.is_empty() || data.starts_with(MINUS_WORD_PREFIX) || !is_valid_word(data) {
            return Err(SearchError::InvalidQueryWord(text.to_string()));
        }

        Ok(Self {
            data,
            is_minus,
            is_stop: stop_words.contains(data),
        })
    }
}

/// Structured query: words that add relevance and words that exclude documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    /// Parse a raw query. Stop words are dropped from both sets.
    pub fn parse(text: &str, stop_words: &StopWords) -> Result<Self> {
        let mut query = Query::default();

        for word in split_into_words(text) {
            let query_word = QueryWord::parse(word, stop_words)?;
            if query_word.is_stop {
                continue;
            }
            if query_word.is_minus {
                query.minus_words.insert(query_word.data.to_string());
            } else {
                query.plus_words.insert(query_word.data.to_string());
            }
        }

        Ok(query)
    }
}
