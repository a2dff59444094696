//! TF-IDF relevance and result ordering.

use crate::config::SearchConfig;
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::{DocId, Document, DocumentStatus};
use std::collections::BTreeMap;

/// Caller-supplied document filter.
///
/// Implemented for any `Fn(DocId, DocumentStatus, i32) -> bool` closure and
/// for [`DocumentStatus`] itself (status equality).
pub trait DocumentPredicate {
    fn matches(&self, doc_id: DocId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocId, DocumentStatus, i32) -> bool,
{
    fn matches(&self, doc_id: DocId, status: DocumentStatus, rating: i32) -> bool {
        self(doc_id, status, rating)
    }
}

impl DocumentPredicate for DocumentStatus {
    fn matches(&self, _doc_id: DocId, status: DocumentStatus, _rating: i32) -> bool {
        status == *self
    }
}

/// ln(N / df). The term must have at least one posting.
pub fn inverse_document_freq(num_docs: usize, doc_freq: usize) -> f64 {
    (num_docs as f64 / doc_freq as f64).ln()
}

/// Score every document matching a plus word, then drop any document that
/// carries a minus word. The predicate gates scoring only.
pub(crate) fn find_all_documents<P>(index: &InvertedIndex, query: &Query, predicate: &P) -> Vec<Document>
where
    P: DocumentPredicate + ?Sized,
{
    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
    for word in &query.plus_words {
        let Some(postings) = index.postings(word) else { continue };
        let idf = inverse_document_freq(index.num_docs(), postings.len());
        for (&doc_id, &tf) in postings {
            let Some(meta) = index.doc_meta(doc_id) else { continue };
            if predicate.matches(doc_id, meta.status, meta.rating) {
                *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
            }
        }
    }

    for word in &query.minus_words {
        let Some(postings) = index.postings(word) else { continue };
        for doc_id in postings.keys() {
            relevance.remove(doc_id);
        }
    }

    relevance
        .into_iter()
        .filter_map(|(doc_id, rel)| index.doc_meta(doc_id).map(|m| Document::new(doc_id, rel, m.rating)))
        .collect()
}

/// Order by relevance descending; documents within epsilon of the head of
/// their run are ordered by rating descending. Then cap the length.
pub fn sort_and_truncate(docs: &mut Vec<Document>, config: &SearchConfig) {
    let eps = config.relevance_epsilon;
    docs.sort_by(|l, r| r.relevance.total_cmp(&l.relevance));
    let mut start = 0;
    while start < docs.len() {
        let head = docs[start].relevance;
        // every pair inside [start, end) differs by less than eps
        let end = docs[start..]
            .iter()
            .position(|d| head - d.relevance >= eps)
            .map_or(docs.len(), |n| start + n);
        docs[start..end].sort_by(|l, r| r.rating.cmp(&l.rating));
        start = end;
    }
    docs.truncate(config.max_result_document_count);
    tracing::trace!(returned = docs.len(), "ranked documents");
}
