use crate::error::Result;
use crate::ranking::DocumentPredicate;
use crate::search_server::SearchServer;
use crate::{Document, DocumentStatus};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueryRecord {
    time: u64,
    is_empty: bool,
}

/// Tracks how many of the last `window` queries came back empty.
///
/// Time advances by one unit per successful query; a query that fails to
/// parse leaves the window untouched.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<QueryRecord>,
    window: u64,
    current_time: u64,
    no_result_requests: usize,
}

impl<'a> RequestQueue<'a> {
    /// Minutes in a day.
    pub const DEFAULT_WINDOW: u64 = 1440;

    pub fn new(server: &'a SearchServer) -> Self {
        Self::with_window(server, Self::DEFAULT_WINDOW)
    }

    /// A zero width is treated as one.
    pub fn with_window(server: &'a SearchServer, window: u64) -> Self {
        let window = window.max(1);
        Self {
            server,
            requests: VecDeque::with_capacity(window.min(Self::DEFAULT_WINDOW) as usize),
            window,
            current_time: 0,
            no_result_requests: 0,
        }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, DocumentStatus::Actual)
    }

    pub fn add_find_request_by_status(&mut self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, status)
    }

    /// Runs the query before touching the window: a query that fails to parse
    /// returns its error without advancing time or evicting anything.
    pub fn add_find_request_with<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        let docs = self.server.find_top_documents_with(raw_query, predicate)?;
        self.record(docs.is_empty());
        Ok(docs)
    }

    fn record(&mut self, is_empty: bool) {
        self.current_time += 1;
        while let Some(oldest) = self.requests.front() {
            if self.current_time - oldest.time < self.window {
                break;
            }
            if oldest.is_empty {
                self.no_result_requests -= 1;
            }
            self.requests.pop_front();
        }
        self.requests.push_back(QueryRecord { time: self.current_time, is_empty });
        if is_empty {
            self.no_result_requests += 1;
        }
        tracing::trace!(time = self.current_time, is_empty, no_results = self.no_result_requests, "recorded request");
    }

    /// Empty-result queries among the last `window` queries.
    pub fn get_no_result_requests(&self) -> usize { self.no_result_requests }

    /// Queries currently inside the window.
    pub fn len(&self) -> usize { self.requests.len() }

    pub fn is_empty(&self) -> bool { self.requests.is_empty() }
}
