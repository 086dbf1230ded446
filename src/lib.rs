// Re-export main components
pub mod document;
pub mod duplicates;
pub mod engine;
pub mod error;
pub mod index;
pub mod loader;
pub mod paginator;
pub mod query;
pub mod ranking;
pub mod request_queue;
pub mod tokenizer;

// Re-export commonly used types
pub use document::{Document, DocumentStatus};
pub use duplicates::remove_duplicates;
pub use engine::SearchServer;
pub use error::{ErrorKind, Result, SearchError};
pub use index::{IndexStats, InvertedIndex};
pub use paginator::{paginate, Page, Pages, Paginator};
pub use query::Query;
pub use ranking::MAX_RESULT_DOCUMENT_COUNT;
pub use request_queue::RequestQueue;
pub use tokenizer::StopWords;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
