//! Core library surface for the book collection manager.
//!
//! The binary only wires these pieces together; tests and other tools can
//! drive the same store and console loop directly.
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod ui;

pub use config::{Config, DEFAULT_STORAGE_FILE};
pub use error::{StoreError, StoreResult};

/// The sole domain type.
pub use models::Book;

/// Persistence plus in-memory queries.
pub use store::{BookCollection, Matches, SearchField};

/// The interactive loop and the console it reads from.
pub use ui::{App, Console};
