//! Core types for the cafe catalog.
//!
//! This crate provides the foundational types used throughout the catalog
//! service:
//!
//! - **Records**: [`Cafe`], one row of the catalog, and [`NewCafe`], the
//!   payload for inserting one.
//! - **Flag coercion**: [`parse_flag`], the integer-like-string-to-bool
//!   conversion used for amenity fields submitted over HTTP forms.
//!
//! The record is deliberately flat: one table, no relations, string-typed
//! free-form labels for `seats` and `coffee_price`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cafe;

pub use cafe::{parse_flag, Cafe, FlagParseError, NewCafe};
