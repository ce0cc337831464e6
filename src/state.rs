//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El inventario se protege con un único
//! lock global: la contención esperada es baja.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::seed::{demo_catalog, demo_inventory};
use crate::repositories::{FeatureCatalog, InventoryRepository};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub inventory: Arc<RwLock<InventoryRepository>>,
    pub features: Arc<RwLock<FeatureCatalog>>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        inventory: InventoryRepository,
        features: FeatureCatalog,
    ) -> Self {
        Self {
            config,
            inventory: Arc::new(RwLock::new(inventory)),
            features: Arc::new(RwLock::new(features)),
        }
    }

    /// Estado inicial según la configuración: vacío o con el inventario demo
    pub fn from_config(config: EnvironmentConfig) -> AppResult<Self> {
        if config.seed_demo_inventory {
            let inventory = demo_inventory()?;
            let features = demo_catalog()?;
            log::info!(
                "🌱 Inventario demo cargado: {} vehículo(s), {} adicional(es)",
                inventory.list_all().len(),
                features.list().len()
            );
            Ok(Self::new(config, inventory, features))
        } else {
            Ok(Self::new(config, InventoryRepository::new(), FeatureCatalog::new()))
        }
    }
}
