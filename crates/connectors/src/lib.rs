pub mod error;
pub mod file;
pub mod seed;
pub mod source;
pub mod sql;
