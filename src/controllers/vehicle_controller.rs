use validator::Validate;

use crate::dto::vehicle_dto::{
    CatalogQuery, CatalogResponse, ContactResponse, CreateVehicleRequest, SaleResponse,
    SellVehicleRequest, UpdateVehicleRequest, VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::models::Vehicle;
use crate::services::catalog_service;
use crate::services::contact_service::{contact_link, contact_message};
use crate::services::pricing_service::{quote, PriceQuote};
use crate::services::transaction_service::mark_sold;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleController {
    state: AppState,
}

fn to_responses(vehicles: Vec<Vehicle>) -> Vec<VehicleResponse> {
    vehicles.into_iter().map(VehicleResponse::from).collect()
}

impl VehicleController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;
        let new_vehicle = request.into_new_vehicle()?;

        let vehicle = self.state.inventory.write().await.add(new_vehicle)?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehicle created successfully",
        ))
    }

    pub async fn get_by_id(&self, id: u64) -> Result<VehicleResponse, AppError> {
        self.state
            .inventory
            .read()
            .await
            .get_by_id(id)
            .map(VehicleResponse::from)
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    pub async fn list_all(&self) -> Vec<VehicleResponse> {
        to_responses(self.state.inventory.read().await.list_all())
    }

    pub async fn list_available(&self) -> Vec<VehicleResponse> {
        to_responses(self.state.inventory.read().await.list_available())
    }

    pub async fn list_featured(&self) -> Vec<VehicleResponse> {
        to_responses(self.state.inventory.read().await.list_featured())
    }

    pub async fn list_sold(&self) -> Vec<VehicleResponse> {
        to_responses(self.state.inventory.read().await.list_sold())
    }

    pub async fn catalog(&self, query: CatalogQuery) -> Result<CatalogResponse, AppError> {
        let filter = query.into_filter()?;
        let for_sale = self.state.inventory.read().await.list_for_sale();

        let vehicles = catalog_service::search(&for_sale, &filter);
        Ok(CatalogResponse {
            total: vehicles.len(),
            facets: catalog_service::facets(&for_sale),
            vehicles: to_responses(vehicles),
        })
    }

    pub async fn update(
        &self,
        id: u64,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        // lectura y escritura bajo el mismo lock
        let mut inventory = self.state.inventory.write().await;
        let current = inventory
            .get_by_id(id)
            .ok_or_else(|| not_found_error("Vehicle", id))?;
        let vehicle = inventory.update(request.apply(current)?)?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehicle updated successfully",
        ))
    }

    pub async fn delete(&self, id: u64) {
        self.state.inventory.write().await.delete(id);
    }

    pub async fn quote(&self, id: u64) -> Result<PriceQuote, AppError> {
        let vehicle = self
            .state
            .inventory
            .read()
            .await
            .get_by_id(id)
            .ok_or_else(|| not_found_error("Vehicle", id))?;
        Ok(quote(&vehicle))
    }

    pub async fn attach_feature(
        &self,
        id: u64,
        feature_id: u64,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let feature = self
            .state
            .features
            .read()
            .await
            .get(feature_id)
            .ok_or_else(|| not_found_error("Feature", feature_id))?;

        let vehicle = self
            .state
            .inventory
            .write()
            .await
            .attach_feature(id, &feature)?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Feature attached",
        ))
    }

    pub async fn select_feature(
        &self,
        id: u64,
        feature_id: u64,
        selected: bool,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let vehicle = self
            .state
            .inventory
            .write()
            .await
            .set_feature_selected(id, feature_id, selected)?;

        Ok(ApiResponse::success(vehicle.into()))
    }

    pub async fn sell(
        &self,
        id: u64,
        request: SellVehicleRequest,
    ) -> Result<ApiResponse<SaleResponse>, AppError> {
        request.validate()?;
        let sale = request.into_sale_request()?;

        let mut inventory = self.state.inventory.write().await;
        let receipt = mark_sold(&mut inventory, &self.state.config.pricing, id, sale)?;

        Ok(ApiResponse::success_with_message(
            receipt.into(),
            "Sale registered",
        ))
    }

    pub async fn contact(&self, id: u64) -> Result<ContactResponse, AppError> {
        let vehicle = self
            .state
            .inventory
            .read()
            .await
            .get_by_id(id)
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        Ok(ContactResponse {
            url: contact_link(&vehicle, &self.state.config.contact_phone),
            message: contact_message(&vehicle),
        })
    }
}
