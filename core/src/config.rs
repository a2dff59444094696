/// Ranking knobs for [`SearchServer`](crate::SearchServer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Result lists are truncated to this many documents.
    pub max_result_document_count: usize,
    /// Relevances closer than this are a tie and fall back to rating order.
    pub relevance_epsilon: f64,
}

impl SearchConfig {
    pub const DEFAULT_MAX_RESULT_DOCUMENT_COUNT: usize = 5;
    pub const DEFAULT_RELEVANCE_EPSILON: f64 = 1e-6;
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_result_document_count: Self::DEFAULT_MAX_RESULT_DOCUMENT_COUNT,
            relevance_epsilon: Self::DEFAULT_RELEVANCE_EPSILON,
        }
    }
}
