//! Shared types for Roster

mod error;

pub use error::{Result, RosterError};
