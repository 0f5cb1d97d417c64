pub mod config;
pub mod params;
pub mod value_objects;
