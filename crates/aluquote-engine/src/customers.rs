//! # Customer Service
//!
//! CRUD for customer records, keyed by `id`.
//!
//! Documents embed a snapshot of the customer at save time, so editing or
//! deleting a customer here never changes existing documents.

use std::sync::Arc;

use tracing::{debug, info};

use aluquote_core::validation::validate_customer_name;
use aluquote_core::Customer;
use aluquote_db::{EntityKind, KvStore};

use crate::error::EngineResult;

/// Service for customer records.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn KvStore>,
}

impl CustomerService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        CustomerService { store }
    }

    /// Lists every customer.
    pub async fn list(&self) -> EngineResult<Vec<Customer>> {
        let records = self.store.list(EntityKind::Customer).await?;
        let customers = records
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Customer>, _>>()
            .map_err(aluquote_db::DbError::from)?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Validates and saves a customer under its id.
    pub async fn save(&self, customer: &Customer) -> EngineResult<()> {
        validate_customer_name(&customer.name)?;

        let record = serde_json::to_value(customer).map_err(aluquote_db::DbError::from)?;
        self.store
            .upsert(EntityKind::Customer, &customer.id, &record)
            .await?;

        info!(id = %customer.id, "Saved customer");
        Ok(())
    }

    /// Deletes a customer by id. Returns false when absent.
    pub async fn delete(&self, id: &str) -> EngineResult<bool> {
        let removed = self.store.remove(EntityKind::Customer, id).await?;
        info!(id = %id, removed, "Deleted customer");
        Ok(removed)
    }
}
