pub mod aggregate;
pub mod error;
pub mod pages;
pub mod rows;


pub use pages::{PageStream, paginate};
pub use rows::{column_values, rows};
