//! Cafe catalog HTTP API service.
//!
//! This crate provides the HTTP API for the cafe catalog, including:
//!
//! - Listing, random selection, and location search of cafe records
//! - Adding new cafes via form submission
//! - Updating the coffee price of an existing cafe
//! - Reporting a cafe closed (delete), behind a shared-secret check
//!
//! # Authorization
//!
//! Only the delete route is protected, by a static shared secret compared
//! for equality against the `secret_key` query parameter. This is a
//! placeholder credential, not a security mechanism; see [`auth`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Static handlers need async to be routable

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
