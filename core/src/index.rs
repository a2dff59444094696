use crate::{DocId, DocumentStatus};
use std::collections::{BTreeMap, HashMap};

/// Per-document metadata kept next to the postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocMeta {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// term -> doc -> term frequency, plus the reverse doc -> term map.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, BTreeMap<DocId, f64>>,
    doc_terms: HashMap<DocId, BTreeMap<String, f64>>,
    docs: HashMap<DocId, DocMeta>,
    // insertion order
    doc_ids: Vec<DocId>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index already validated, stop-word free `words`. An empty slice registers
    /// the document without terms.
    pub(crate) fn insert(&mut self, doc_id: DocId, words: &[&str], meta: DocMeta) {
        let terms = self.doc_terms.entry(doc_id).or_default();
        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in words {
                *self
                    .postings
                    .entry((*word).to_string())
                    .or_default()
                    .entry(doc_id)
                    .or_insert(0.0) += inv_word_count;
                *terms
                    .entry((*word).to_string())
                    .or_insert(0.0) += inv_word_count;
            }
        }
        self.docs.insert(doc_id, meta);
        self.doc_ids.push(doc_id);
    }

    pub fn num_docs(&self) -> usize { self.docs.len() }

    pub fn contains(&self, doc_id: DocId) -> bool { self.docs.contains_key(&doc_id) }

    pub fn doc_meta(&self, doc_id: DocId) -> Option<&DocMeta> { self.docs.get(&doc_id) }

    pub fn postings(&self, term: &str) -> Option<&BTreeMap<DocId, f64>> { self.postings.get(term) }

    pub fn doc_terms(&self, doc_id: DocId) -> Option<&BTreeMap<String, f64>> { self.doc_terms.get(&doc_id) }

    pub fn doc_id_at(&self, index: usize) -> Option<DocId> { self.doc_ids.get(index).copied() }

    pub fn doc_ids(&self) -> &[DocId] { &self.doc_ids }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    /// True when `term` has a posting for `doc_id`.
    pub fn has_posting(&self, term: &str, doc_id: DocId) -> bool {
        self.postings.get(term).is_some_and(|p| p.contains_key(&doc_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const META: DocMeta = DocMeta { rating: 0, status: DocumentStatus::Actual };

    #[test]
    fn accumulates_term_frequency() {
        let mut index = InvertedIndex::new();
        index.insert(7, &["a", "b", "a", "c"], META);
        assert_eq!(index.postings("a").unwrap()[&7], 0.5);
        assert_eq!(index.doc_terms(7).unwrap()["c"], 0.25);
        assert_eq!(index.num_terms(), 3);
    }

    #[test]
    fn empty_document_has_no_terms() {
        let mut index = InvertedIndex::new();
        index.insert(1, &[], META);
        assert!(index.contains(1));
        assert!(index.doc_terms(1).unwrap().is_empty());
        assert_eq!(index.num_terms(), 0);
    }
}
