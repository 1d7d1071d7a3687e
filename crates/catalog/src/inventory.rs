//! The bundled inventory dataset.
//!
//! Named product collections ("electronics", "food", …) loaded once at
//! process start and treated as read-only for the lifetime of the process.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use forgestore_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// Read-only named collections of products.
///
/// Product order within a collection is preserved as loaded. Collections are
/// addressed by name; queries that span collections take the caller's
/// explicit list, so the map's own ordering is immaterial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    collections: BTreeMap<String, Vec<Product>>,
}

impl Inventory {
    /// Build an inventory from already-constructed collections.
    ///
    /// Intended for composition roots and tests that assemble products in
    /// code; dataset payloads should go through [`Inventory::from_json_str`]
    /// so malformed data is rejected.
    pub fn from_collections<I>(collections: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Product>)>,
    {
        Self {
            collections: collections.into_iter().collect(),
        }
    }

    /// Parse an inventory dataset from its JSON payload.
    ///
    /// The payload must be an object mapping collection name to an array of
    /// products. Anything else is rejected with
    /// [`DomainError::MalformedData`], never silently coerced.
    pub fn from_json_str(payload: &str) -> DomainResult<Self> {
        let collections: BTreeMap<String, Vec<Product>> = serde_json::from_str(payload)
            .map_err(|e| DomainError::malformed(format!("inventory payload: {e}")))?;

        let inventory = Self { collections };
        inventory.ensure_unique_ids()?;
        Ok(inventory)
    }

    /// Load the dataset from a file at process start.
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("reading inventory dataset at {}", path.display()))?;
        let inventory = Self::from_json_str(&payload)
            .with_context(|| format!("parsing inventory dataset at {}", path.display()))?;

        tracing::info!(
            collections = inventory.collections.len(),
            products = inventory.product_count(),
            "loaded inventory dataset"
        );
        Ok(inventory)
    }

    /// The products of one collection, in dataset order. Unknown names
    /// yield the empty slice (graceful degradation, same stance as
    /// pagination).
    pub fn collection(&self, name: &str) -> &[Product] {
        self.collections
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Total number of products across all collections.
    pub fn product_count(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.values().all(Vec::is_empty)
    }

    // Product ids are unique across the whole dataset; a duplicate means the
    // upstream export is broken.
    fn ensure_unique_ids(&self) -> DomainResult<()> {
        let mut seen: std::collections::HashSet<ProductId> = std::collections::HashSet::new();
        for product in self.collections.values().flatten() {
            if !seen.insert(product.id) {
                return Err(DomainError::malformed(format!(
                    "duplicate product id {} in inventory dataset",
                    product.id
                )));
            }
        }
        Ok(())
    }
}
