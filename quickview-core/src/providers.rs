//! In-memory providers backed by already-decoded data
use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::catalog::CatalogEntry;
use crate::error::ProductError;
use crate::model::Product;
use crate::{CatalogProvider, ProductProvider};

/// Serves products by handle from a fixed set.
#[derive(Debug, Clone, Default)]
pub struct StaticProductProvider {
    products: BTreeMap<String, Product>,
}

impl StaticProductProvider {
    #[must_use]
    pub fn new<I>(products: I) -> Self
    where
        I: IntoIterator<Item = Product>,
    {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.handle.clone(), product))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, handle: &str) -> Option<&Product> {
        self.products.get(handle)
    }
}

#[async_trait(?Send)]
impl ProductProvider for StaticProductProvider {
    async fn load_product(&self, handle: &str) -> Result<Option<Product>, ProductError> {
        Ok(self.products.get(handle).cloned())
    }
}

/// Serves one fixed list for every collection.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogProvider {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalogProvider {
    #[must_use]
    pub const fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait(?Send)]
impl CatalogProvider for StaticCatalogProvider {
    async fn load_catalog(&self, _collection: &str) -> Result<Vec<CatalogEntry>, ProductError> {
        Ok(self.entries.clone())
    }
}
