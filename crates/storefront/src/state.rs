use crate::{
    abstract_trait::storage::DynObjectStore,
    di::{DependenciesInject, DependenciesInjectDeps},
    storage::FsObjectStore,
};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynJwtService,
    config::{Config, ConnectionPool, JwtConfig},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_service: DynJwtService,
    pub registry: Arc<Registry>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let mut registry = Registry::default();

        let jwt_service: DynJwtService = Arc::new(JwtConfig::new(&config.jwt_secret));

        let storage: DynObjectStore = Arc::new(FsObjectStore::new(
            config.storage.media_root.clone(),
            &config.storage.public_base_url,
        ));

        let deps = DependenciesInjectDeps {
            pool,
            storage,
            retention_days: config.purge.retention_days,
        };

        let di_container = DependenciesInject::new(deps, &mut registry);

        Self {
            di_container,
            jwt_service,
            registry: Arc::new(registry),
        }
    }
}
