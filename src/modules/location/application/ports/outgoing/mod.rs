mod location_query;

pub use location_query::{LocationQuery, LocationQueryError};
