//! Repository error types
//!
//! Structured errors for repository operations. The resource handler never
//! translates these; they travel up to the HTTP layer as unhandled faults.
//!
//! # Example
//!
//! ```rust
//! use streetaddresses_api::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
//!
//! let error = RepositoryError::connection_failed(RepositoryOperation::Find, "connection refused")
//!     .with_entity("StreetAddress", "5");
//! assert!(matches!(error.kind, RepositoryErrorKind::ConnectionFailed));
//! assert!(error.is_retriable());
//! ```

use std::fmt;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Looking up a single entity by key
    Find,
    /// Persisting a new entity
    Add,
    /// Checking that the backing store can serve requests
    Ready,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Find => write!(f, "find"),
            Self::Add => write!(f, "add"),
            Self::Ready => write!(f, "ready"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Database constraint violation
    ConstraintViolation,
    /// Failed to connect to the backing store
    ConnectionFailed,
    /// Operation timed out
    Timeout,
    /// Underlying database error
    DatabaseError,
    /// Key space exhausted
    KeyExhausted,
    /// Other unclassified error
    Other,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstraintViolation => write!(f, "constraint_violation"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::DatabaseError => write!(f, "database_error"),
            Self::KeyExhausted => write!(f, "key_exhausted"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured repository error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The type of entity involved (e.g., "StreetAddress")
    pub entity_type: Option<String>,
    /// The key of the entity involved
    pub entity_id: Option<String>,
}

impl RepositoryError {
    /// Create a new repository error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
            entity_id: None,
        }
    }

    /// Create a connection failed error
    pub fn connection_failed(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::ConnectionFailed, message)
    }

    /// Create a constraint violation error
    pub fn constraint_violation(
        operation: RepositoryOperation,
        message: impl Into<String>,
    ) -> Self {
        Self::new(operation, RepositoryErrorKind::ConstraintViolation, message)
    }

    /// Create a timeout error
    pub fn timeout(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::Timeout, message)
    }

    /// Create a database error
    pub fn database_error(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::DatabaseError, message)
    }

    /// Add entity context to an existing error
    #[must_use]
    pub fn with_entity(
        mut self,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Check if this error is retriable (transient errors that may succeed on retry)
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind,
            RepositoryErrorKind::ConnectionFailed | RepositoryErrorKind::Timeout
        )
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let (Some(entity_type), Some(entity_id)) = (&self.entity_type, &self.entity_id) {
            write!(f, " [{}: {}]", entity_type, entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}

#[cfg(feature = "database")]
impl RepositoryError {
    /// Classify a sqlx error raised during `operation`
    pub fn from_sqlx(operation: RepositoryOperation, err: sqlx::Error) -> Self {
        use sqlx::Error;
        match &err {
            Error::PoolTimedOut => Self::timeout(operation, err.to_string()),
            Error::Io(_) | Error::Tls(_) | Error::PoolClosed => {
                Self::connection_failed(operation, err.to_string())
            }
            Error::Database(db) if db.constraint().is_some() => {
                Self::constraint_violation(operation, err.to_string())
            }
            _ => Self::database_error(operation, err.to_string()),
        }
    }
}
