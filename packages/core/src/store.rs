//! In-memory product store.
//!
//! `ProductStore` holds the product records in seed order. Records are never
//! added or removed after construction; only `stock` and `demand` change,
//! through [`ProductStore::get_mut`].
//!
//! The store does no locking of its own. The inventory engine owns it behind
//! a `tokio::sync::RwLock` so reads can share and each mutation runs under
//! the writer lock.

use crate::inventory::types::Product;

/// Ordered in-memory collection of `Product` records.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// Create a store holding `products` in the given order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All records, in seed order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a record by id for in-place mutation.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// `true` when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
