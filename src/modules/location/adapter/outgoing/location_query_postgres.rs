use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::location::application::domain::entities::{Region, RegionPath, RegionScope};
use crate::location::application::ports::outgoing::{LocationQuery, LocationQueryError};

use super::sea_orm_entity::{cities, countries, districts, states};

fn location_error(err: DbErr) -> LocationQueryError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            LocationQueryError::Unavailable(err.to_string())
        }
        other => LocationQueryError::DatabaseError(other.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct LocationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LocationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LocationQuery for LocationQueryPostgres {
    async fn list_regions(&self, scope: &RegionScope) -> Result<Vec<Region>, LocationQueryError> {
        let db = &*self.db;

        let regions: Vec<Region> = match scope {
            RegionScope::Countries => countries::Entity::find()
                .order_by_asc(countries::Column::Name)
                .all(db)
                .await
                .map_err(location_error)?
                .into_iter()
                .map(Region::from)
                .collect(),

            RegionScope::States { country } => states::Entity::find()
                .filter(states::Column::CountryCode.eq(country.as_str()))
                .order_by_asc(states::Column::Name)
                .all(db)
                .await
                .map_err(location_error)?
                .into_iter()
                .map(Region::from)
                .collect(),

            RegionScope::Cities { country, state } => cities::Entity::find()
                .filter(cities::Column::CountryCode.eq(country.as_str()))
                .filter(cities::Column::StateCode.eq(state.as_str()))
                .order_by_asc(cities::Column::Name)
                .all(db)
                .await
                .map_err(location_error)?
                .into_iter()
                .map(Region::from)
                .collect(),

            RegionScope::Districts {
                country,
                state,
                city,
            } => districts::Entity::find()
                .filter(districts::Column::CountryCode.eq(country.as_str()))
                .filter(districts::Column::StateCode.eq(state.as_str()))
                .filter(districts::Column::CityCode.eq(city.as_str()))
                .order_by_asc(districts::Column::Name)
                .all(db)
                .await
                .map_err(location_error)?
                .into_iter()
                .map(Region::from)
                .collect(),
        };

        Ok(regions)
    }

    // Child rows reference their parents, so the deepest level alone decides.
    async fn path_exists(&self, path: &RegionPath) -> Result<bool, LocationQueryError> {
        let db = &*self.db;
        let country = path.country.clone();
        let state = path.state.clone();

        let found = match (&path.city, &path.district) {
            (Some(city), Some(district)) => {
                districts::Entity::find_by_id((country, state, city.clone(), district.clone()))
                    .one(db)
                    .await
                    .map_err(location_error)?
                    .is_some()
            }
            (Some(city), None) => cities::Entity::find_by_id((country, state, city.clone()))
                .one(db)
                .await
                .map_err(location_error)?
                .is_some(),
            (None, None) => states::Entity::find_by_id((country, state))
                .one(db)
                .await
                .map_err(location_error)?
                .is_some(),
            (None, Some(_)) => false,
        };

        Ok(found)
    }
}
