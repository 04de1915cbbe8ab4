mod list_regions_service;

pub use list_regions_service::ListRegionsService;
