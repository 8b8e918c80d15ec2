//! Database schemas for Roster
//!
//! Defines the MongoDB document structure for employee records.

mod employee;

pub use employee::{EmployeeDoc, EmployeeLevel, EMPLOYEE_COLLECTION};
