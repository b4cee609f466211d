//! Core data model and configuration for the adintel workspace.
//!
//! Defines the `AdRecord` wire schema shared by the classifier, the insights
//! engine, the store, and the HTTP API, plus the raw-capture input types
//! supplied by the external extraction component.

pub mod app_config;
pub mod capture;
pub mod config;
pub mod error;
pub mod record;
pub mod watchlist;

pub use app_config::AppConfig;
pub use capture::{CandidateFragment, CtaLink, MediaDescriptor, RawCapture};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use record::{
    AdCopy, AdMedia, AdRecord, Advertiser, Approach, Creative, Differentiator, EmotionalProfile,
    Funnel, ImageAsset, LandingPage, Metrics, Objective, Performance, Platform, Positioning,
    RecordMetadata, SentimentLabel, StrategyProfile, Targeting, Timeline, TriggerCategory,
};
pub use watchlist::{load_watchlist, AdvertiserConfig, WatchlistFile};
