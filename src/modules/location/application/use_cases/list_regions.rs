use async_trait::async_trait;

use crate::location::application::domain::entities::{Region, RegionScope};
use crate::location::application::ports::outgoing::LocationQueryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListRegionsError {
    #[error("{0}")]
    InvalidCode(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Failed to fetch regions: {0}")]
    QueryFailed(String),
}

impl From<LocationQueryError> for ListRegionsError {
    fn from(err: LocationQueryError) -> Self {
        match err {
            LocationQueryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            LocationQueryError::DatabaseError(msg) => Self::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListRegionsUseCase: Send + Sync {
    async fn execute(&self, scope: RegionScope) -> Result<Vec<Region>, ListRegionsError>;
}
