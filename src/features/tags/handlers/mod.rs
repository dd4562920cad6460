pub mod tag_handler;

pub use tag_handler::{__path_list_tags, list_tags};
