//! Types and pure data logic shared by the backend gateway and the frontend listing.

pub mod domain;
