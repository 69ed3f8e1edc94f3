pub mod crawler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod report;
pub mod store;

pub use crawler::Crawler;
pub use error::ScanError;
pub use fetch::Fetcher;
pub use store::{TermRecord, TermStore};
