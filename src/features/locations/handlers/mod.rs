pub mod location_handler;

pub use location_handler::{
    __path_get_location, __path_list_nearby_locations, __path_recommend_locations,
    get_location, list_nearby_locations, recommend_locations,
};
