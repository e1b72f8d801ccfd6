//! Port abstraction for resource persistence adapters and their errors.
//!
//! One store instance serves one resource type. Stores own identifier
//! assignment so callers never choose ids.

use async_trait::async_trait;

use crate::domain::{Record, ResourceFields, ResourceId};

/// Persistence errors raised by resource store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceStoreError {
    /// No record exists under the identifier.
    #[error("resource {id} not found")]
    NotFound { id: ResourceId },
    /// The backing store could not serve the request.
    #[error("resource store unavailable: {message}")]
    Unavailable { message: String },
}

impl ResourceStoreError {
    pub fn not_found(id: ResourceId) -> Self {
        Self::NotFound { id }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceStore<F: ResourceFields>: Send + Sync {
    /// Every stored record, ordered by identifier.
    async fn list(&self) -> Result<Vec<Record<F>>, ResourceStoreError>;

    /// Fetch a single record.
    async fn get(&self, id: ResourceId) -> Result<Record<F>, ResourceStoreError>;

    /// Persist validated fields under a freshly assigned identifier.
    async fn create(&self, fields: F) -> Result<Record<F>, ResourceStoreError>;

    /// Replace the fields of an existing record, keeping its identifier.
    async fn update(&self, id: ResourceId, fields: F) -> Result<Record<F>, ResourceStoreError>;

    /// Remove a record. Its identifier is never reissued.
    async fn delete(&self, id: ResourceId) -> Result<(), ResourceStoreError>;
}
