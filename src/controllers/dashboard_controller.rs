use crate::services::dashboard_service::{inventory_stats, InventoryStats};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct DashboardController {
    state: AppState,
}

impl DashboardController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn stats(&self) -> Result<InventoryStats, AppError> {
        let vehicles = self.state.inventory.read().await.list_all();
        inventory_stats(&vehicles)
    }
}
