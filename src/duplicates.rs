use crate::engine::SearchServer;
use std::collections::{BTreeSet, HashSet};
use tracing::info;

/// Remove documents whose set of distinct words repeats an earlier
/// document's. The first inserted document of each group is kept.
///
/// Returns the removed ids in insertion order.
pub fn remove_duplicates(server: &mut SearchServer) -> Vec<i32> {
    let duplicates: Vec<i32> = {
        let mut seen: HashSet<BTreeSet<&str>> = HashSet::new();
        server
            .document_ids()
            .filter(|&document_id| {
                let words: BTreeSet<&str> = server
                    .word_frequencies(document_id)
                    .keys()
                    .map(String::as_str)
                    .collect();
                !seen.insert(words)
            })
            .collect()
    };

    for &document_id in &duplicates {
        server.remove_document(document_id);
        info!("Found duplicate document id {}", document_id);
    }

    duplicates
}
