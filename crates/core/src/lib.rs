//! Domain core for the record catalog service.
//!
//! Holds the [`Record`](record::Record) data model and the immutable
//! [`Catalog`](catalog::Catalog) that all HTTP queries are answered from.
//! This crate is pure and synchronous: no async types, no HTTP, no I/O.

pub mod catalog;
pub mod error;
pub mod record;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use record::Record;
