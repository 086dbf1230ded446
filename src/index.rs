use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

static EMPTY_FREQUENCIES: BTreeMap<String, f64> = BTreeMap::new();

/// Inverted index: term -> document id -> normalized term frequency
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    word_to_document_freqs: HashMap<String, BTreeMap<i32, f64>>,
    document_to_word_freqs: HashMap<i32, BTreeMap<String, f64>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document's (already filtered) words to the index.
    ///
    /// A document without words leaves no entries behind.
    pub fn add_document(&mut self, doc_id: i32, words: &[&str]) {
        if words.is_empty() {
            return;
        }

        let inverted_word_count = 1.0 / words.len() as f64;
        let doc_freqs = self.document_to_word_freqs.entry(doc_id).or_default();

        for &word in words {
            *self
                .word_to_document_freqs
                .entry(word.to_string())
                .or_default()
                .entry(doc_id)
                .or_insert(0.0) += inverted_word_count;
            *doc_freqs.entry(word.to_string()).or_insert(0.0) += inverted_word_count;
        }
    }

    /// Remove a document from the index
    pub fn remove_document(&mut self, doc_id: i32) {
        let Some(doc_freqs) = self.document_to_word_freqs.remove(&doc_id) else {
            return;
        };

        for word in doc_freqs.keys() {
            if let Some(docs) = self.word_to_document_freqs.get_mut(word) {
                docs.remove(&doc_id);
                if docs.is_empty() {
                    self.word_to_document_freqs.remove(word);
                }
            }
        }
    }

    /// Get documents containing a word with their term frequencies
    pub fn get_documents(&self, word: &str) -> Option<&BTreeMap<i32, f64>> {
        self.word_to_document_freqs.get(word)
    }

    pub fn contains(&self, word: &str, doc_id: i32) -> bool {
        self.get_documents(word)
            .is_some_and(|docs| docs.contains_key(&doc_id))
    }

    /// Get number of documents containing a word (for IDF calculation)
    pub fn doc_frequency(&self, word: &str) -> usize {
        self.get_documents(word).map_or(0, BTreeMap::len)
    }

    /// Word frequencies of a document, empty for unknown ids
    pub fn word_frequencies(&self, doc_id: i32) -> &BTreeMap<String, f64> {
        self.document_to_word_freqs
            .get(&doc_id)
            .unwrap_or(&EMPTY_FREQUENCIES)
    }

    /// Get index statistics
    pub fn stats(&self, total_documents: usize) -> IndexStats {
        IndexStats {
            total_documents,
            total_words: self.word_to_document_freqs.len(),
            avg_docs_per_word: if self.word_to_document_freqs.is_empty() {
                0.0
            } else {
                self.word_to_document_freqs
                    .values()
                    .map(BTreeMap::len)
                    .sum::<usize>() as f64
                    / self.word_to_document_freqs.len() as f64
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_documents: usize,
    pub total_words: usize,
    pub avg_docs_per_word: f64,
}
