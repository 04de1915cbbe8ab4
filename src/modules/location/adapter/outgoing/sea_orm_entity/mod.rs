pub mod cities;
pub mod countries;
pub mod districts;
pub mod states;
