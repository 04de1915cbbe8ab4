use async_trait::async_trait;
use std::sync::Arc;

use crate::location::application::domain::entities::{Region, RegionPath, RegionScope};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationQueryError {
    #[error("Location store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-only access to the seeded address tables. Codes arrive normalised.
#[async_trait]
pub trait LocationQuery: Send + Sync {
    /// Children of the scope's parent ordered by name. An unknown parent has none.
    async fn list_regions(&self, scope: &RegionScope) -> Result<Vec<Region>, LocationQueryError>;

    /// True when the deepest code in `path` exists under the codes above it.
    async fn path_exists(&self, path: &RegionPath) -> Result<bool, LocationQueryError>;
}

#[async_trait]
impl<T: LocationQuery + ?Sized> LocationQuery for Arc<T> {
    async fn list_regions(&self, scope: &RegionScope) -> Result<Vec<Region>, LocationQueryError> {
        (**self).list_regions(scope).await
    }

    async fn path_exists(&self, path: &RegionPath) -> Result<bool, LocationQueryError> {
        (**self).path_exists(path).await
    }
}
