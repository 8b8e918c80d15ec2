//! Database layer
//!
//! MongoDB client wrapper, typed collection handles, and document schemas.

pub mod collections;
pub mod mongo;
pub mod schemas;

pub use collections::Collections;
pub use mongo::{IntoValidator, MongoClient, MongoCollection};
