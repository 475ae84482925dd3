//! A001 Tool listing: one spreadsheet row per AI tool.

pub mod aggregate;
pub mod listing;
pub mod rating;
pub mod schema;

pub use aggregate::{ListingResponse, ToolRecord};
pub use schema::ToolField;
