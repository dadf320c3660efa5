use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::catalog::state::CatalogState;
use crate::domain::catalog::store::CatalogSessionStore;
use crate::domain::logger::Logger;
use crate::domain::product::fallback::fallback_catalog;
use crate::domain::product::repository::ProductCatalogClient;
use crate::domain::shared::observable::Observable;

/// Catalog session backed by a [`ProductCatalogClient`].
///
/// Overlapping requests are not sequenced: each completion writes the state
/// and the last one to finish wins.
pub struct CatalogSessionStoreImpl {
    pub client: Arc<dyn ProductCatalogClient>,
    pub logger: Arc<dyn Logger>,
    state: Observable<CatalogState>,
}

impl CatalogSessionStoreImpl {
    pub fn new(client: Arc<dyn ProductCatalogClient>, logger: Arc<dyn Logger>) -> Self {
        Self {
            client,
            logger,
            state: Observable::new(CatalogState::default()),
        }
    }

    /// Creates the session store and spawns its single implicit initial load.
    /// Must be called from within a tokio runtime.
    pub fn start(client: Arc<dyn ProductCatalogClient>, logger: Arc<dyn Logger>) -> Arc<Self> {
        let store = Arc::new(Self::new(client, logger));
        spawn_load(store.clone());
        store
    }
}

/// Fires a `load()` on a tokio task.
pub fn spawn_load(store: Arc<dyn CatalogSessionStore>) -> JoinHandle<()> {
    tokio::spawn(async move { store.load().await })
}

/// Fires a `search(query)` on a tokio task.
pub fn spawn_search(store: Arc<dyn CatalogSessionStore>, query: String) -> JoinHandle<()> {
    tokio::spawn(async move { store.search(&query).await })
}

#[async_trait]
impl CatalogSessionStore for CatalogSessionStoreImpl {
    async fn load(&self) {
        self.logger.info("Loading product catalog");
        self.state.update(CatalogState::begin_request);

        match self.client.fetch_all().await {
            Ok(products) => {
                self.logger
                    .info(&format!("Loaded {} products", products.len()));
                self.state.update(|state| state.succeed(products));
            }
            Err(err) => {
                let message = format!("Failed to load products: {}", err);
                self.logger.error(&message);
                self.logger.warn("Showing built-in fallback catalog");
                self.state
                    .update(|state| state.fail(message, Some(fallback_catalog())));
            }
        }
    }

    async fn search(&self, query: &str) {
        if query.trim().is_empty() {
            return self.load().await;
        }

        self.logger.info(&format!("Searching products: {}", query));
        self.state.update(CatalogState::begin_request);

        match self.client.search_by_query(query).await {
            Ok(products) => {
                self.logger.info(&format!(
                    "Found {} products for '{}'",
                    products.len(),
                    query
                ));
                self.state.update(|state| state.succeed(products));
            }
            Err(err) => {
                let message = format!("Search failed: {}", err);
                self.logger.error(&message);
                let mut used_fallback = false;
                self.state.update(|state| {
                    let fallback = state.products.is_empty().then(fallback_catalog);
                    used_fallback = fallback.is_some();
                    state.fail(message, fallback);
                });
                if used_fallback {
                    self.logger.warn("Showing built-in fallback catalog");
                }
            }
        }
    }

    fn snapshot(&self) -> CatalogState {
        self.state.snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }
}
