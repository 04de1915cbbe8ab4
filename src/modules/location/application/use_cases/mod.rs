pub mod list_regions;
