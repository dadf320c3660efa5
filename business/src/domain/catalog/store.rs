use async_trait::async_trait;
use tokio::sync::watch;

use super::state::CatalogState;

/// Owner of the catalog session state.
///
/// `load` and `search` resolve once the resulting state is published; callers
/// that fire and forget observe the outcome through [`CatalogSessionStore::subscribe`].
#[async_trait]
pub trait CatalogSessionStore: Send + Sync {
    async fn load(&self);
    async fn search(&self, query: &str);
    fn snapshot(&self) -> CatalogState;
    fn subscribe(&self) -> watch::Receiver<CatalogState>;
}
