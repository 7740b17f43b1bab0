//! Board Configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};
use crate::notify::{DEFAULT_TTL_MS, MAX_TTL_MS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Document collection holding the columns
    pub collection: String,
    /// How long a toast stays visible
    pub notification_ttl_ms: u64,
    /// Mirror the board through a document store instead of the local sample board
    pub use_document_store: bool,
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            collection: "columns".to_string(),
            notification_ttl_ms: DEFAULT_TTL_MS,
            use_document_store: false,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| DomainError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.collection.trim().is_empty() {
            return Err(DomainError::Config("collection must not be empty".to_string()));
        }
        if self.notification_ttl_ms == 0 {
            return Err(DomainError::Config("notification_ttl_ms must be positive".to_string()));
        }
        if self.notification_ttl_ms > MAX_TTL_MS {
            return Err(DomainError::Config(format!("notification_ttl_ms must be at most {}", MAX_TTL_MS)));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> DomainResult<log::LevelFilter> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| DomainError::Config(format!("unknown log level `{}`", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = BoardConfig::from_json("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.notification_ttl_ms, 5_000);
        assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = BoardConfig::from_json(r#"{"use_document_store":true,"log_level":"debug"}"#).unwrap();
        assert!(config.use_document_store);
        assert_eq!(config.collection, "columns");
        assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values() {
        assert!(BoardConfig::from_json(r#"{"notification_ttl_ms":0}"#).is_err());
        assert!(BoardConfig::from_json(r#"{"log_level":"loud"}"#).is_err());
        assert!(BoardConfig::from_json(r#"{"collection":" "}"#).is_err());
        assert!(BoardConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_ttl_upper_bound() {
        assert!(BoardConfig::from_json(r#"{"notification_ttl_ms":86400000}"#).is_ok());
        assert!(BoardConfig::from_json(r#"{"notification_ttl_ms":86400001}"#).is_err());
        assert!(BoardConfig::from_json(r#"{"notification_ttl_ms":9000000000000000000}"#).is_err());
    }
}
