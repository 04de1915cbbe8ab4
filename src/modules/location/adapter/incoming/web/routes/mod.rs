mod list_regions;

pub use list_regions::{
    list_cities_handler, list_countries_handler, list_districts_handler, list_states_handler,
    RegionResponse,
};

#[doc(hidden)]
pub use list_regions::{
    __path_list_cities_handler, __path_list_countries_handler, __path_list_districts_handler,
    __path_list_states_handler,
};
