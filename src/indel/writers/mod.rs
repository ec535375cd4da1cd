mod write_catalog;
mod write_coords;

pub use write_catalog::{write_catalog, write_length_histogram};
pub use write_coords::{write_events, write_polygons};
