use std::sync::Arc;

use stockroom_infra::InMemoryProductCatalog;
use stockroom_products::{ProductApplicationService, ProductCatalog, StockService};

/// Catalog handle shared by every request.
pub type SharedCatalog = Arc<dyn ProductCatalog>;

/// Application services handed to the HTTP handlers.
pub struct AppServices {
    pub products: ProductApplicationService<SharedCatalog>,
}

impl AppServices {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            products: ProductApplicationService::new(catalog, StockService::new()),
        }
    }

    /// Wire everything against the in-memory catalog.
    pub fn in_memory() -> Self {
        tracing::info!("using in-memory product catalog");
        Self::new(Arc::new(InMemoryProductCatalog::new()))
    }
}
