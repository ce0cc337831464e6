use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};

use crate::controllers::feature_controller::FeatureController;
use crate::dto::feature_dto::CreateFeatureRequest;
use crate::dto::ApiResponse;
use crate::models::CatalogFeature;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_feature_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_features).post(create_feature))
        .route("/:id", delete(delete_feature))
}

async fn list_features(State(state): State<AppState>) -> Json<Vec<CatalogFeature>> {
    Json(FeatureController::new(state).list().await)
}

async fn create_feature(
    State(state): State<AppState>,
    Json(request): Json<CreateFeatureRequest>,
) -> Result<Json<ApiResponse<CatalogFeature>>, AppError> {
    let controller = FeatureController::new(state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn delete_feature(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<ApiResponse<()>> {
    FeatureController::new(state).delete(id).await;
    Json(ApiResponse::message("Feature deleted"))
}
