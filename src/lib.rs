//! Roster - employee records data-access layer
//!
//! Wraps the MongoDB driver behind typed collection handles: connect to the
//! store, make sure the employee collection carries its schema validator, and
//! hand the rest of the application a [`Collections`] registry to query
//! through.
//!
//! The record shape itself is enforced server-side by the validator, so
//! writes arriving from outside this crate are held to the same schema.

pub mod config;
pub mod db;
pub mod types;

pub use config::Args;
pub use db::{Collections, MongoClient, MongoCollection};
pub use types::{Result, RosterError};
