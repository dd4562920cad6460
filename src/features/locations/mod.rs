//! Location discovery: nearby search, tag-filtered recommendations, and place detail.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/locations?lat=&lon=&radius=` | Locations within `radius` km (default 2) |
//! | POST | `/api/locations/recommendations` | Locations within `radius` km (default 5) carrying every requested tag |
//! | GET | `/api/locations/{id}` | One location with all of its tags |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::LocationService;
pub use stores::PgLocationStore;
