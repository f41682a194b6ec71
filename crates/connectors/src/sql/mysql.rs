pub mod adapter;
pub mod config;
pub mod params;
pub mod row;
pub mod source;
