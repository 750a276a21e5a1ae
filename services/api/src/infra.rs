use metrics_exporter_prometheus::PrometheusHandle;
use skillup::accounts::{AccountStore, StoreError, StoredAccount};
use skillup::config::CatalogConfig;
use skillup::discovery::FacetIndex;
use skillup::listings::{Catalog, CatalogImportError};
use skillup::roadmap::{seed_roadmap, RoadmapItem};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only catalogs shared by the discovery endpoints.
#[derive(Clone)]
pub(crate) struct DiscoveryState {
    pub(crate) jobs: Arc<Catalog>,
    pub(crate) courses: Arc<Catalog>,
    pub(crate) roadmap: Arc<Vec<RoadmapItem>>,
}

impl DiscoveryState {
    pub(crate) fn load(config: &CatalogConfig) -> Result<Self, CatalogImportError> {
        Ok(Self::new(config.load_jobs()?, config.load_courses()?))
    }

    pub(crate) fn new(jobs: Catalog, courses: Catalog) -> Self {
        Self {
            jobs: Arc::new(jobs),
            courses: Arc::new(courses),
            roadmap: Arc::new(seed_roadmap()),
        }
    }

    /// Skills requested by the job catalog, in first-seen order.
    pub(crate) fn market_demand(&self) -> Vec<String> {
        FacetIndex::build(self.jobs.listings()).skills
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAccountStore {
    accounts: Arc<Mutex<Vec<StoredAccount>>>,
}

impl AccountStore for InMemoryAccountStore {
    fn load(&self) -> Result<Vec<StoredAccount>, StoreError> {
        let guard = self
            .accounts
            .lock()
            .map_err(|_| StoreError::Unavailable("account mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, accounts: &[StoredAccount]) -> Result<(), StoreError> {
        let mut guard = self
            .accounts
            .lock()
            .map_err(|_| StoreError::Unavailable("account mutex poisoned".to_string()))?;
        *guard = accounts.to_vec();
        Ok(())
    }
}
