use async_trait::async_trait;

use crate::location::application::domain::entities::{Region, RegionScope};
use crate::location::application::ports::outgoing::LocationQuery;
use crate::location::application::use_cases::list_regions::{
    ListRegionsError, ListRegionsUseCase,
};

#[derive(Debug, Clone)]
pub struct ListRegionsService<Q>
where
    Q: LocationQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListRegionsService<Q>
where
    Q: LocationQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListRegionsUseCase for ListRegionsService<Q>
where
    Q: LocationQuery + Send + Sync,
{
    async fn execute(&self, scope: RegionScope) -> Result<Vec<Region>, ListRegionsError> {
        let scope = scope
            .normalized()
            .map_err(|e| ListRegionsError::InvalidCode(e.to_string()))?;

        Ok(self.query.list_regions(&scope).await?)
    }
}
