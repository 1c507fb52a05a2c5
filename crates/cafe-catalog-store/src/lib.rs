//! SQLite storage layer for the cafe catalog.
//!
//! This crate persists cafe records in a single relational table and exposes
//! the catalog operations behind the [`Store`] trait. Every operation is one
//! auto-committed statement; uniqueness and primary-key integrity come from
//! the table constraints, not from any in-process coordination.
//!
//! # Example
//!
//! ```no_run
//! use cafe_catalog_core::NewCafe;
//! use cafe_catalog_store::{SqliteStore, Store};
//!
//! # async fn example() -> cafe_catalog_store::Result<()> {
//! let store = SqliteStore::open("cafes.db").await?;
//!
//! let cafe = store
//!     .insert(&NewCafe {
//!         name: "Workshop".into(),
//!         map_url: "https://maps.example/workshop".into(),
//!         img_url: "https://img.example/workshop.jpg".into(),
//!         location: "Clerkenwell".into(),
//!         seats: "20-30".into(),
//!         has_toilet: true,
//!         has_wifi: true,
//!         has_sockets: true,
//!         can_take_calls: false,
//!         coffee_price: Some("£2.50".into()),
//!     })
//!     .await?;
//!
//! assert!(cafe.id > 0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod schema;
pub mod sqlite;

pub use error::{Result, StoreError};
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use cafe_catalog_core::{Cafe, NewCafe};

/// The storage trait defining all catalog operations.
///
/// This trait abstracts the storage layer, allowing for different
/// implementations (e.g. SQLite on disk, in-memory for testing).
#[async_trait]
pub trait Store: Send + Sync {
    /// Return every record. Order is insertion order in practice, but not
    /// guaranteed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_all(&self) -> Result<Vec<Cafe>>;

    /// Pick one record uniformly at random.
    ///
    /// Not cryptographically random; a general-purpose uniform pick over the
    /// full result set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyCatalog` if no records exist.
    async fn get_random(&self) -> Result<Cafe>;

    /// Return every record whose location matches `location` exactly
    /// (case-sensitive). Zero matches is an empty vec, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn find_by_location(&self, location: &str) -> Result<Vec<Cafe>>;

    /// Persist a new record and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NameTaken` if the name collides with an existing
    /// record.
    async fn insert(&self, cafe: &NewCafe) -> Result<Cafe>;

    /// Replace the coffee price of the record with the given id and return
    /// the updated record. No other field is touched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has that id.
    async fn update_price(&self, id: i64, new_price: &str) -> Result<Cafe>;

    /// Remove the record with the given id permanently.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has that id.
    async fn delete(&self, id: i64) -> Result<()>;
}
