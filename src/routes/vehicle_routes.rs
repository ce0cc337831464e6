use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    AttachFeatureRequest, CatalogQuery, CatalogResponse, ContactResponse, CreateVehicleRequest,
    SaleResponse, SelectFeatureRequest, SellVehicleRequest, UpdateVehicleRequest,
    VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::services::pricing_service::PriceQuote;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle).get(list_vehicles))
        .route("/available", get(list_available))
        .route("/featured", get(list_featured))
        .route("/sold", get(list_sold))
        .route("/catalog", get(catalog))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/:id/quote", get(quote_vehicle))
        .route("/:id/features", post(attach_feature))
        .route("/:id/features/:feature_id", put(select_feature))
        .route("/:id/sell", post(sell_vehicle))
        .route("/:id/contact", get(contact_vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<Vec<VehicleResponse>> {
    Json(VehicleController::new(state).list_all().await)
}

async fn list_available(State(state): State<AppState>) -> Json<Vec<VehicleResponse>> {
    Json(VehicleController::new(state).list_available().await)
}

async fn list_featured(State(state): State<AppState>) -> Json<Vec<VehicleResponse>> {
    Json(VehicleController::new(state).list_featured().await)
}

async fn list_sold(State(state): State<AppState>) -> Json<Vec<VehicleResponse>> {
    Json(VehicleController::new(state).list_sold().await)
}

async fn catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<CatalogResponse>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller.catalog(query).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<ApiResponse<()>> {
    VehicleController::new(state).delete(id).await;
    Json(ApiResponse::message("Vehicle deleted"))
}

async fn quote_vehicle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PriceQuote>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller.quote(id).await?;
    Ok(Json(response))
}

async fn attach_feature(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<AttachFeatureRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller.attach_feature(id, request.feature_id).await?;
    Ok(Json(response))
}

async fn select_feature(
    State(state): State<AppState>,
    Path((id, feature_id)): Path<(u64, u64)>,
    Json(request): Json<SelectFeatureRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller
        .select_feature(id, feature_id, request.selected)
        .await?;
    Ok(Json(response))
}

async fn sell_vehicle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<SellVehicleRequest>,
) -> Result<Json<ApiResponse<SaleResponse>>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller.sell(id, request).await?;
    Ok(Json(response))
}

async fn contact_vehicle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ContactResponse>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller.contact(id).await?;
    Ok(Json(response))
}
