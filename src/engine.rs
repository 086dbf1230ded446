use crate::document::{compute_average_rating, Document, DocumentData, DocumentStatus};
use crate::error::{Result, SearchError};
use crate::index::{IndexStats, InvertedIndex};
use crate::query::Query;
use crate::ranking::{compute_relevance, rank_documents};
use crate::tokenizer::{split_into_words, StopWords};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Main search engine.
///
/// Owns the document store, the inverted index and the insertion-order id
/// list. Every operation runs to completion before returning; ingestion
/// must be serialized against queries by the caller.
#[derive(Debug, Clone, Default)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    storage: HashMap<i32, DocumentData>,
    document_ids: Vec<i32>,
}

impl SearchServer {
    /// Create an empty search server without stop words
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search server with a validated stop-word collection
    pub fn with_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            stop_words: StopWords::from_words(stop_words)?,
            ..Self::default()
        })
    }

    /// Create a search server from space-separated stop words
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Self::with_stop_words(split_into_words(text))
    }

    /// Add more stop words.
    ///
    /// Documents that are already indexed keep their words.
    pub fn set_stop_words(&mut self, text: &str) {
        self.stop_words.extend_from_text(text);
    }

    /// Index a document. Nothing is modified when validation fails.
    pub fn add_document(
        &mut self,
        document_id: i32,
        document: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if document_id < 0 {
            return Err(SearchError::NegativeDocumentId(document_id));
        }
        if self.storage.contains_key(&document_id) {
            return Err(SearchError::DuplicateDocumentId(document_id));
        }
        let words = self.stop_words.analyze(document)?;

        let rating = compute_average_rating(ratings);
        self.index.add_document(document_id, &words);
        self.storage.insert(document_id, DocumentData { rating, status });
        self.document_ids.push(document_id);

        debug!(
            document_id,
            words = words.len(),
            rating,
            ?status,
            "Document added"
        );
        Ok(())
    }

    /// Remove a document from every structure. Returns whether it existed.
    pub fn remove_document(&mut self, document_id: i32) -> bool {
        if self.storage.remove(&document_id).is_none() {
            return false;
        }
        self.index.remove_document(document_id);
        self.document_ids.retain(|&id| id != document_id);

        debug!(document_id, "Document removed");
        true
    }

    /// Top documents for `raw_query` among those accepted by `predicate`
    pub fn find_top_documents_by<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(i32, DocumentStatus, i32) -> bool,
    {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let relevance = compute_relevance(&query, &self.index, &self.storage, predicate);
        let documents = rank_documents(&relevance, &self.storage);

        debug!(
            query = raw_query,
            matched = relevance.len(),
            returned = documents.len(),
            "Search finished"
        );
        Ok(documents)
    }

    /// Top documents with the given status
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_by(raw_query, |_, document_status, _| document_status == status)
    }

    /// Top documents with [`DocumentStatus::Actual`]
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Plus words of the query found in the document, or nothing if any
    /// minus word is found there.
    pub fn match_document(
        &self,
        raw_query: &str,
        document_id: i32,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let status = self
            .storage
            .get(&document_id)
            .map(|data| data.status)
            .ok_or(SearchError::DocumentNotFound(document_id))?;

        if query
            .minus_words
            .iter()
            .any(|word| self.index.contains(word, document_id))
        {
            return Ok((Vec::new(), status));
        }

        let matched_words = query
            .plus_words
            .into_iter()
            .filter(|word| self.index.contains(word, document_id))
            .collect();

        Ok((matched_words, status))
    }

    pub fn document_count(&self) -> usize {
        self.storage.len()
    }

    /// Id of the document added at position `index`
    pub fn document_id(&self, index: usize) -> Result<i32> {
        self.document_ids
            .get(index)
            .copied()
            .ok_or(SearchError::IndexOutOfRange {
                index,
                count: self.document_ids.len(),
            })
    }

    /// Document ids in insertion order
    pub fn document_ids(&self) -> std::iter::Copied<std::slice::Iter<'_, i32>> {
        self.document_ids.iter().copied()
    }

    /// Word frequencies of a document, empty for unknown ids
    pub fn word_frequencies(&self, document_id: i32) -> &BTreeMap<String, f64> {
        self.index.word_frequencies(document_id)
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Get index statistics
    pub fn index_stats(&self) -> IndexStats {
        self.index.stats(self.document_count())
    }
}

impl<'a> IntoIterator for &'a SearchServer {
    type Item = i32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, i32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.document_ids()
    }
}
