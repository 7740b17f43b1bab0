//! Board configuration stored in the browser.

use kanban_core::{BoardConfig, DomainResult};

/// localStorage key holding the JSON config
pub const CONFIG_KEY: &str = "kanban-board.config";

fn read_stored() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(CONFIG_KEY).ok()?
}

/// Defaults when nothing is stored, an error when the stored JSON is invalid.
pub fn load() -> DomainResult<BoardConfig> {
    parse_stored(read_stored().as_deref())
}

fn parse_stored(raw: Option<&str>) -> DomainResult<BoardConfig> {
    match raw {
        Some(json) if !json.trim().is_empty() => BoardConfig::from_json(json),
        _ => Ok(BoardConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored() {
        assert_eq!(parse_stored(None).unwrap(), BoardConfig::default());
        assert_eq!(parse_stored(Some("  ")).unwrap(), BoardConfig::default());
        assert!(parse_stored(Some(r#"{"use_document_store":true}"#)).unwrap().use_document_store);
        assert!(parse_stored(Some("{broken")).is_err());
    }
}
