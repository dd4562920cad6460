pub mod constants;
pub mod geo;
pub mod input;
pub mod test_helpers;
pub mod types;
