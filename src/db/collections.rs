//! Collection registry
//!
//! Built once at startup and passed down to consumers, so the set of live
//! handles is explicit rather than hidden in process-wide state. Read-only
//! after construction.

use crate::db::mongo::{MongoClient, MongoCollection};
use crate::db::schemas::{EmployeeDoc, EMPLOYEE_COLLECTION};
use crate::types::Result;

/// Typed handles to every collection the application uses
#[derive(Clone)]
pub struct Collections {
    employees: MongoCollection<EmployeeDoc>,
}

impl Collections {
    /// Initialize all collections, attaching validators as needed
    pub async fn init(client: &MongoClient) -> Result<Self> {
        let employees = client.collection::<EmployeeDoc>(EMPLOYEE_COLLECTION).await?;

        Ok(Self { employees })
    }

    /// Handle to the employees collection
    pub fn employees(&self) -> &MongoCollection<EmployeeDoc> {
        &self.employees
    }
}
