//! # Catalog Service
//!
//! Typed CRUD over the catalog entity kinds: products, glass, styles,
//! colours and accessories.
//!
//! The store speaks `serde_json::Value`; this service is where records
//! gain and lose their types. All catalog records are keyed by their `id`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use aluquote_core::{Accessory, Colour, Glass, Product, Style, ValidationError};
use aluquote_db::{EntityKind, KvStore};

use crate::error::EngineResult;

/// Service for catalog records.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn KvStore>,
}

impl CatalogService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        CatalogService { store }
    }

    // =========================================================================
    // Generic plumbing
    // =========================================================================

    async fn list_as<T: DeserializeOwned>(&self, kind: EntityKind) -> EngineResult<Vec<T>> {
        let records = self.store.list(kind).await?;
        let typed = records
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(aluquote_db::DbError::from)?;

        debug!(kind = %kind, count = typed.len(), "Listed catalog records");
        Ok(typed)
    }

    async fn save_as<T: Serialize>(
        &self,
        kind: EntityKind,
        id: &str,
        name: &str,
        record: &T,
    ) -> EngineResult<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "name".to_string(),
            }
            .into());
        }

        let value = serde_json::to_value(record).map_err(aluquote_db::DbError::from)?;
        self.store.upsert(kind, id, &value).await?;
        info!(kind = %kind, id = %id, "Saved catalog record");
        Ok(())
    }

    async fn delete_from(&self, kind: EntityKind, id: &str) -> EngineResult<bool> {
        let removed = self.store.remove(kind, id).await?;
        info!(kind = %kind, id = %id, removed, "Deleted catalog record");
        Ok(removed)
    }

    // =========================================================================
    // Products
    // =========================================================================

    pub async fn list_products(&self) -> EngineResult<Vec<Product>> {
        self.list_as(EntityKind::Product).await
    }

    pub async fn save_product(&self, product: &Product) -> EngineResult<()> {
        self.save_as(EntityKind::Product, &product.id, &product.name, product)
            .await
    }

    pub async fn delete_product(&self, id: &str) -> EngineResult<bool> {
        self.delete_from(EntityKind::Product, id).await
    }

    // =========================================================================
    // Glass
    // =========================================================================

    pub async fn list_glass(&self) -> EngineResult<Vec<Glass>> {
        self.list_as(EntityKind::Glass).await
    }

    pub async fn save_glass(&self, glass: &Glass) -> EngineResult<()> {
        self.save_as(EntityKind::Glass, &glass.id, &glass.name, glass)
            .await
    }

    pub async fn delete_glass(&self, id: &str) -> EngineResult<bool> {
        self.delete_from(EntityKind::Glass, id).await
    }

    // =========================================================================
    // Styles
    // =========================================================================

    pub async fn list_styles(&self) -> EngineResult<Vec<Style>> {
        self.list_as(EntityKind::Style).await
    }

    pub async fn save_style(&self, style: &Style) -> EngineResult<()> {
        self.save_as(EntityKind::Style, &style.id, &style.name, style)
            .await
    }

    pub async fn delete_style(&self, id: &str) -> EngineResult<bool> {
        self.delete_from(EntityKind::Style, id).await
    }

    // =========================================================================
    // Colours
    // =========================================================================

    pub async fn list_colours(&self) -> EngineResult<Vec<Colour>> {
        self.list_as(EntityKind::Colour).await
    }

    pub async fn save_colour(&self, colour: &Colour) -> EngineResult<()> {
        self.save_as(EntityKind::Colour, &colour.id, &colour.name, colour)
            .await
    }

    pub async fn delete_colour(&self, id: &str) -> EngineResult<bool> {
        self.delete_from(EntityKind::Colour, id).await
    }

    // =========================================================================
    // Accessories
    // =========================================================================

    pub async fn list_accessories(&self) -> EngineResult<Vec<Accessory>> {
        self.list_as(EntityKind::Accessory).await
    }

    pub async fn save_accessory(&self, accessory: &Accessory) -> EngineResult<()> {
        self.save_as(
            EntityKind::Accessory,
            &accessory.id,
            &accessory.name,
            accessory,
        )
        .await
    }

    pub async fn delete_accessory(&self, id: &str) -> EngineResult<bool> {
        self.delete_from(EntityKind::Accessory, id).await
    }
}
