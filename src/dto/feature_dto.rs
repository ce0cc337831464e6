use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

// Request para agregar un adicional al catálogo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFeatureRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub price: Decimal,
}
