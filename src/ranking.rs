use crate::document::{is_relevance_equal, Document, DocumentData, DocumentStatus};
use crate::index::InvertedIndex;
use crate::query::Query;
use std::collections::{BTreeMap, HashMap};

/// Maximum number of documents a search returns
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// ln(total documents / documents containing the word)
pub fn inverse_document_frequency(total_documents: usize, containing_documents: usize) -> f64 {
    (total_documents as f64 / containing_documents as f64).ln()
}

/// Accumulate TF-IDF relevance for every document passing `predicate`,
/// then drop every document holding a minus word.
pub fn compute_relevance<P>(
    query: &Query,
    index: &InvertedIndex,
    storage: &HashMap<i32, DocumentData>,
    predicate: P,
) -> BTreeMap<i32, f64>
where
    P: Fn(i32, DocumentStatus, i32) -> bool,
{
    let mut document_to_relevance: BTreeMap<i32, f64> = BTreeMap::new();

    for word in &query.plus_words {
        let Some(docs) = index.get_documents(word) else {
            continue;
        };
        let idf = inverse_document_frequency(storage.len(), docs.len());

        for (&doc_id, &term_freq) in docs {
            let Some(data) = storage.get(&doc_id) else {
                continue;
            };
            if predicate(doc_id, data.status, data.rating) {
                *document_to_relevance.entry(doc_id).or_insert(0.0) += term_freq * idf;
            }
        }
    }

    for word in &query.minus_words {
        if let Some(docs) = index.get_documents(word) {
            for doc_id in docs.keys() {
                document_to_relevance.remove(doc_id);
            }
        }
    }

    document_to_relevance
}

/// Turn accumulated relevance into ranked documents, best first, at most
/// [`MAX_RESULT_DOCUMENT_COUNT`] of them.
pub fn rank_documents(
    document_to_relevance: &BTreeMap<i32, f64>,
    storage: &HashMap<i32, DocumentData>,
) -> Vec<Document> {
    let mut documents: Vec<Document> = document_to_relevance
        .iter()
        .filter_map(|(&id, &relevance)| {
            storage
                .get(&id)
                .map(|data| Document::new(id, relevance, data.rating))
        })
        .collect();

    sort_by_rank(&mut documents);
    documents.truncate(MAX_RESULT_DOCUMENT_COUNT);
    documents
}

/// Order documents by descending relevance. Documents whose relevance is
/// within epsilon of the first document of their run are ordered by
/// descending rating.
pub fn sort_by_rank(documents: &mut [Document]) {
    documents.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));

    let mut start = 0;
    while start < documents.len() {
        let head = documents[start].relevance;
        let end = documents[start..]
            .iter()
            .position(|d| !is_relevance_equal(head, d.relevance))
            .map_or(documents.len(), |offset| start + offset);

        documents[start..end].sort_by(|a, b| b.rating.cmp(&a.rating));
        start = end;
    }
}
