pub mod config;
pub mod google;
