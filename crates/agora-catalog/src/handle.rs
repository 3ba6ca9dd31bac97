use std::sync::Arc;

use agora_core::Catalog;
use parking_lot::RwLock;
use tracing::info;

/// Shared, read-only view of the loaded catalog. Readers take a cheap
/// snapshot; the only update path swaps in a whole replacement catalog
/// (there is no incremental append/remove).
#[derive(Clone)]
pub struct CatalogHandle {
    inner: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Immutable snapshot for one or more evaluations. A snapshot never
    /// changes under the caller, even across a concurrent replace.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.inner.read().clone()
    }

    pub fn replace(&self, catalog: Catalog) {
        let catalog = Arc::new(catalog);
        let listings = catalog.len();
        *self.inner.write() = catalog;
        info!(listings, "catalog replaced");
    }
}
