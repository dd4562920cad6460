pub mod country_handler;

pub use country_handler::{__path_list_countries, list_countries};
