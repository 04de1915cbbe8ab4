pub mod app_state_builder;
pub mod fakes;
pub mod fixtures;
pub mod in_memory_locations;
pub mod in_memory_store;
pub mod stubs;

#[cfg(test)]
pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}
