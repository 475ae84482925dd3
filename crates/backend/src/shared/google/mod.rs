//! Google service-account auth and the Sheets v4 values API.

pub mod credentials;
pub mod error;
pub mod sheets_client;
pub mod token;

pub use credentials::ServiceAccountCredentials;
pub use error::SheetsError;
pub use sheets_client::{GoogleSheetsClient, SpreadsheetSource};
