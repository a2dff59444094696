use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::index::{DocMeta, InvertedIndex};
use crate::query::Query;
use crate::ranking::{find_all_documents, sort_and_truncate, DocumentPredicate};
use crate::tokenizer::{tokenize, StopWords};
use crate::{DocId, Document, DocumentStatus};
use std::collections::BTreeMap;

/// In-memory search engine: stop words, inverted index and ranking config.
#[derive(Debug)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchServer {
    /// Build from any collection of stop words. Empty strings are ignored.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(stop_words, SearchConfig::default())
    }

    /// Build from space separated stop words.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Ok(Self::from_parts(StopWords::from_text(text)?, SearchConfig::default()))
    }

    pub fn with_config<I, S>(stop_words: I, config: SearchConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_parts(StopWords::from_words(stop_words)?, config))
    }

    pub fn from_parts(stop_words: StopWords, config: SearchConfig) -> Self {
        Self { stop_words, index: InvertedIndex::new(), config }
    }

    pub fn config(&self) -> &SearchConfig { &self.config }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    /// Index a document. Nothing is mutated unless the whole document is accepted.
    pub fn add_document(&mut self, doc_id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        if doc_id < 0 || self.index.contains(doc_id) {
            return Err(SearchError::InvalidId(doc_id));
        }
        let words = tokenize(text, &self.stop_words)?;
        let meta = DocMeta { rating: compute_average_rating(ratings), status };
        self.index.insert(doc_id, &words, meta);
        tracing::debug!(doc_id, words = words.len(), %status, rating = meta.rating, "indexed document");
        Ok(())
    }

    pub fn document_count(&self) -> usize { self.index.num_docs() }

    /// Id of the document added at insertion position `index`.
    pub fn document_id_at(&self, index: usize) -> Result<DocId> {
        self.index
            .doc_id_at(index)
            .ok_or(SearchError::IndexOutOfRange { index, count: self.document_count() })
    }

    /// Ids in insertion order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.index.doc_ids().iter().copied()
    }

    /// Term frequencies of one document. Empty for documents without terms.
    pub fn word_frequencies(&self, doc_id: DocId) -> Result<BTreeMap<&str, f64>> {
        let terms = self.index.doc_terms(doc_id).ok_or(SearchError::UnknownDocument(doc_id))?;
        Ok(terms.iter().map(|(w, &tf)| (w.as_str(), tf)).collect())
    }

    pub fn parse_query(&self, raw_query: &str) -> Result<Query> {
        Query::parse(raw_query, &self.stop_words)
    }

    /// Plus words present in the document, in lexicographic order, with the
    /// document status. Any minus word present empties the list.
    pub fn match_document(&self, raw_query: &str, doc_id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        let query = self.parse_query(raw_query)?;
        let meta = self.index.doc_meta(doc_id).ok_or(SearchError::UnknownDocument(doc_id))?;

        if query.minus_words.iter().any(|w| self.index.has_posting(w, doc_id)) {
            return Ok((Vec::new(), meta.status));
        }
        let matched = query
            .plus_words
            .into_iter()
            .filter(|w| self.index.has_posting(w, doc_id))
            .collect();
        Ok((matched, meta.status))
    }

    /// Top documents with status [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, status)
    }

    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        let query = self.parse_query(raw_query)?;
        let mut docs = find_all_documents(&self.index, &query, &predicate);
        sort_and_truncate(&mut docs, &self.config);
        Ok(docs)
    }
}

/// Truncating integer average; 0 for no ratings.
fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    // the mean of i32 values always fits in i32
    (sum / ratings.len() as i64) as i32
}
