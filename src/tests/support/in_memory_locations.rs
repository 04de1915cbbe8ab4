use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::location::application::domain::entities::{Region, RegionPath, RegionScope};
use crate::location::application::ports::outgoing::{LocationQuery, LocationQueryError};

/// Address tree keyed by full code path, e.g. `["CN", "GD", "SZ"]`.
#[derive(Default)]
pub struct InMemoryLocations {
    regions: Vec<(Vec<String>, String)>,
    unavailable: AtomicBool,
}

impl InMemoryLocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// CN > GD > {SZ > {NS, FT}, GZ} and US > {CA > LA, NY}.
    pub fn seeded() -> Self {
        Self::new()
            .with(&["CN"], "China")
            .with(&["CN", "GD"], "Guangdong")
            .with(&["CN", "GD", "SZ"], "Shenzhen")
            .with(&["CN", "GD", "GZ"], "Guangzhou")
            .with(&["CN", "GD", "SZ", "NS"], "Nanshan")
            .with(&["CN", "GD", "SZ", "FT"], "Futian")
            .with(&["US"], "United States")
            .with(&["US", "CA"], "California")
            .with(&["US", "NY"], "New York")
            .with(&["US", "CA", "LA"], "Los Angeles")
    }

    pub fn with(mut self, path: &[&str], name: &str) -> Self {
        self.regions.push((
            path.iter().map(|c| c.to_string()).collect(),
            name.to_string(),
        ));
        self
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), LocationQueryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(LocationQueryError::Unavailable(
                "location store offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl LocationQuery for InMemoryLocations {
    async fn list_regions(&self, scope: &RegionScope) -> Result<Vec<Region>, LocationQueryError> {
        self.check()?;

        let parent: Vec<&str> = match scope {
            RegionScope::Countries => vec![],
            RegionScope::States { country } => vec![country.as_str()],
            RegionScope::Cities { country, state } => vec![country.as_str(), state.as_str()],
            RegionScope::Districts {
                country,
                state,
                city,
            } => vec![country.as_str(), state.as_str(), city.as_str()],
        };

        let mut regions: Vec<Region> = self
            .regions
            .iter()
            .filter(|(path, _)| {
                path.len() == parent.len() + 1
                    && path.iter().zip(&parent).all(|(a, b)| a == b)
            })
            .map(|(path, name)| Region {
                code: path[parent.len()].clone(),
                name: name.clone(),
            })
            .collect();
        regions.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(regions)
    }

    async fn path_exists(&self, path: &RegionPath) -> Result<bool, LocationQueryError> {
        self.check()?;

        let mut key = vec![path.country.clone(), path.state.clone()];
        key.extend(path.city.iter().cloned());
        key.extend(path.district.iter().cloned());

        Ok(self.regions.iter().any(|(p, _)| *p == key))
    }
}
