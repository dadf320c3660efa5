use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Display condition derived from a [`CatalogState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    /// No load or search has completed yet.
    Idle,
    Loading,
    Loaded,
    /// The last request failed; products hold the fallback or the stale list.
    Failed,
}

impl std::fmt::Display for CatalogPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogPhase::Idle => write!(f, "idle"),
            CatalogPhase::Loading => write!(f, "loading"),
            CatalogPhase::Loaded => write!(f, "loaded"),
            CatalogPhase::Failed => write!(f, "failed"),
        }
    }
}

/// Snapshot of the catalog session.
///
/// `loading` and `error` are never both set once a request settles: the start
/// of a request clears `error`, and its completion clears `loading`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    settled: bool,
}

impl CatalogState {
    pub fn phase(&self) -> CatalogPhase {
        if self.loading {
            CatalogPhase::Loading
        } else if self.error.is_some() {
            CatalogPhase::Failed
        } else if self.settled {
            CatalogPhase::Loaded
        } else {
            CatalogPhase::Idle
        }
    }

    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub(crate) fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self, products: Vec<Product>) {
        self.products = products;
        self.error = None;
        self.loading = false;
        self.settled = true;
    }

    pub(crate) fn fail(&mut self, message: String, products: Option<Vec<Product>>) {
        if let Some(products) = products {
            self.products = products;
        }
        self.error = Some(message);
        self.loading = false;
        self.settled = true;
    }
}
