pub mod access_resolver;
