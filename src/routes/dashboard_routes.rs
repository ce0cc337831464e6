use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::services::dashboard_service::InventoryStats;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/stats", get(stats))
}

async fn stats(State(state): State<AppState>) -> Result<Json<InventoryStats>, AppError> {
    let controller = DashboardController::new(state);
    let response = controller.stats().await?;
    Ok(Json(response))
}
