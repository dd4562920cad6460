//! Tag catalog: the category labels locations are filtered by.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TagService;
