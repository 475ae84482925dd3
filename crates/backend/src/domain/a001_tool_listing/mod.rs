pub mod service;

pub use service::{ListingState, SheetGateway};
