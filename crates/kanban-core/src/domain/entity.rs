//! Domain Layer - Core Entity Trait
//!
//! Basic contract shared by cards and columns, plus the domain error type.

use serde::{Deserialize, Serialize};

/// Core trait for board entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Index of the entity with `id`, if present
pub fn position_of<T: Entity>(entities: &[T], id: &str) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// Required text was empty after trimming
    Validation(String),
    /// Referenced column or card does not exist
    NotFound(String),
    /// The document store rejected or failed a write
    Persistence(String),
    /// Configuration could not be read
    Config(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
            DomainError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::NotFound("column c1".to_string());
        assert_eq!(err.to_string(), "Not found: column c1");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }
}
