use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Path of the persisted corpus (JSON array or JSON-lines).
    pub corpus_path: PathBuf,
    pub watchlist_path: PathBuf,
    /// Max in-flight classification tasks for the CLI's parallel map.
    pub classify_max_concurrency: usize,
}
