pub mod app_state;
pub mod errors;
pub mod models;
pub mod services;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod test_utils;
