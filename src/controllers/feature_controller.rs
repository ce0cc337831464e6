use validator::Validate;

use crate::dto::feature_dto::CreateFeatureRequest;
use crate::dto::ApiResponse;
use crate::models::CatalogFeature;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct FeatureController {
    state: AppState,
}

impl FeatureController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn list(&self) -> Vec<CatalogFeature> {
        self.state.features.read().await.list()
    }

    pub async fn create(
        &self,
        request: CreateFeatureRequest,
    ) -> Result<ApiResponse<CatalogFeature>, AppError> {
        request.validate()?;
        let feature = self
            .state
            .features
            .write()
            .await
            .add(&request.name, request.price)?;

        Ok(ApiResponse::success_with_message(feature, "Feature created"))
    }

    pub async fn delete(&self, id: u64) {
        self.state.features.write().await.delete(id);
    }
}
