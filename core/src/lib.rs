pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod paginator;
pub mod query;
pub mod ranking;
pub mod request_queue;
pub mod search_server;
pub mod tokenizer;

pub use config::SearchConfig;
pub use document::{DocId, Document, DocumentStatus};
pub use error::{Result, SearchError};
pub use index::{DocMeta, InvertedIndex};
pub use paginator::{paginate, Page, Paginator};
pub use query::Query;
pub use ranking::DocumentPredicate;
pub use request_queue::RequestQueue;
pub use search_server::SearchServer;
