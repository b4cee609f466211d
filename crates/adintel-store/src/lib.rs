//! JSON corpus persistence boundary for adintel.
//!
//! The corpus is an ordered sequence of [`adintel_core::AdRecord`] stored as
//! a JSON array (or JSON-lines). Appends dedup by record fingerprint so
//! overlapping capture batches can be re-ingested safely.

pub mod corpus;
pub mod error;

pub use corpus::{append_records, fingerprint, load_corpus, save_corpus};
pub use error::StoreError;
