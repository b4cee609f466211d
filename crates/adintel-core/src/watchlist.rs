use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One advertiser the analyst wants profiled by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvertiserConfig {
    pub name: String,
    pub page_id: Option<String>,
    pub notes: Option<String>,
}

impl AdvertiserConfig {
    /// Generate a URL-safe slug from the advertiser name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Deserialize)]
pub struct WatchlistFile {
    pub advertisers: Vec<AdvertiserConfig>,
}

/// Load and validate the advertiser watchlist from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_watchlist(path: &Path) -> Result<WatchlistFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WatchlistIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let watchlist: WatchlistFile = serde_yaml::from_str(&content)?;
    validate_watchlist(&watchlist)?;
    Ok(watchlist)
}

fn validate_watchlist(watchlist: &WatchlistFile) -> Result<(), ConfigError> {
    let mut seen_slugs: HashSet<String> = HashSet::new();

    for advertiser in &watchlist.advertisers {
        if advertiser.name.trim().is_empty() {
            return Err(ConfigError::WatchlistInvalid(
                "advertiser with empty name".to_string(),
            ));
        }
        let slug = advertiser.slug();
        if slug.is_empty() {
            return Err(ConfigError::WatchlistInvalid(format!(
                "advertiser '{}' produces an empty slug",
                advertiser.name
            )));
        }
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::WatchlistInvalid(format!(
                "duplicate advertiser slug '{slug}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_advertiser(name: &str) -> AdvertiserConfig {
        AdvertiserConfig {
            name: name.to_owned(),
            page_id: None,
            notes: None,
        }
    }

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(make_advertiser("Glow Labs").slug(), "glow-labs");
    }

    #[test]
    fn slug_drops_punctuation() {
        assert_eq!(make_advertiser("Dr. Smith & Co.").slug(), "dr-smith-co");
    }

    #[test]
    fn slug_collapses_repeated_separators() {
        assert_eq!(make_advertiser("A  --  B").slug(), "a-b");
    }

    #[test]
    fn validate_rejects_duplicate_slugs() {
        let watchlist = WatchlistFile {
            advertisers: vec![make_advertiser("Glow Labs"), make_advertiser("glow labs")],
        };
        let err = validate_watchlist(&watchlist).unwrap_err();
        assert!(matches!(err, ConfigError::WatchlistInvalid(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn validate_rejects_empty_name() {
        let watchlist = WatchlistFile {
            advertisers: vec![make_advertiser("  ")],
        };
        assert!(validate_watchlist(&watchlist).is_err());
    }

    #[test]
    fn yaml_parses_into_watchlist() {
        let yaml = "advertisers:\n  - name: Glow Labs\n    page_id: \"105168211848225\"\n  - name: Peak Fitness\n";
        let watchlist: WatchlistFile = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(watchlist.advertisers.len(), 2);
        assert_eq!(
            watchlist.advertisers[0].page_id.as_deref(),
            Some("105168211848225")
        );
        assert!(validate_watchlist(&watchlist).is_ok());
    }
}
