//! Server-rendered page surface
//!
//! Plain HTML with standard forms; pages consume the JSON API through
//! [`crate::client`] rather than reading the database.

pub mod pages;
pub mod routes;
pub mod views;

pub use routes::router;
