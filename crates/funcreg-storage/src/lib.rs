//! # funcreg-storage
//!
//! SQLite persistence for registered functions.
//! Serialized writer plus pooled readers, `user_version` migrations,
//! and the queries behind `IFunctionStorage`.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use connection::DatabaseManager;
pub use engine::FunctionStore;
