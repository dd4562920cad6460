//! Country reference data (ISO 3166-1 alpha-2), the foreign-key target of locations.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CountryService;
