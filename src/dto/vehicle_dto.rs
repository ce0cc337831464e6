use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::{
    AdditionalFeature, FuelType, NewVehicle, OwnerInfo, OwnershipType, PaymentMethod,
    SaleOutcome, Transmission, Vehicle, VehicleStatus,
};
use crate::services::catalog_service::{CatalogFacets, CatalogFilter, SortOrder};
use crate::services::pricing_service::quoted_price;
use crate::services::transaction_service::{BuyerDetails, SaleReceipt, SaleRequest};
use crate::utils::errors::{bad_request_error, AppResult};
use crate::utils::validation::validate_date;

fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    validate_date(value)
        .map_err(|_| bad_request_error(&format!("{} must be a YYYY-MM-DD date, got '{}'", field, value)))
}

fn parse_decimal(field: &str, value: &str) -> AppResult<Decimal> {
    value
        .trim()
        .parse()
        .map_err(|_| bad_request_error(&format!("{} must be a decimal number, got '{}'", field, value)))
}

// `null` explícito => Some(None) (borrar); campo ausente => None (sin cambios)
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// Request para dar de alta un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(min = 1, max = 60))]
    pub brand: String,

    #[validate(length(min = 1, max = 60))]
    pub category: String,

    pub year: i32,
    pub mileage: i64,
    pub fuel: String,
    pub transmission: String,
    pub price: Decimal,
    pub purchase_cost: Option<Decimal>,
    pub purchase_date: String,
    pub ownership_type: Option<String>,
    pub status: Option<String>,

    #[serde(default)]
    pub featured: bool,
    pub rating: Option<Decimal>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub additional_features: Vec<AdditionalFeature>,
    pub owner_info: Option<OwnerInfo>,
}

impl CreateVehicleRequest {
    /// Convierte el request en un vehículo nuevo; los enums se validan aquí
    pub fn into_new_vehicle(self) -> AppResult<NewVehicle> {
        let ownership_type = match &self.ownership_type {
            Some(value) => value.parse::<OwnershipType>()?,
            None => OwnershipType::Owned,
        };
        let status = match &self.status {
            Some(value) => value.parse::<VehicleStatus>()?,
            None if ownership_type == OwnershipType::Consignment => VehicleStatus::Consigned,
            None => VehicleStatus::Available,
        };

        Ok(NewVehicle {
            fuel: self.fuel.parse::<FuelType>()?,
            transmission: self.transmission.parse::<Transmission>()?,
            purchase_date: parse_date("purchase_date", &self.purchase_date)?,
            purchase_cost: self.purchase_cost.unwrap_or(Decimal::ZERO),
            name: self.name,
            brand: self.brand,
            category: self.category,
            year: self.year,
            mileage: self.mileage,
            price: self.price,
            status,
            ownership_type,
            sale_date: None,
            featured: self.featured,
            rating: self.rating,
            description: self.description,
            images: self.images,
            additional_features: self.additional_features,
            buyer_info: None,
            owner_info: self.owner_info,
        })
    }
}

// Request para actualizar un vehículo existente
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 60))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 60))]
    pub category: Option<String>,

    pub year: Option<i32>,
    pub mileage: Option<i64>,
    pub fuel: Option<String>,
    pub transmission: Option<String>,
    pub price: Option<Decimal>,
    pub purchase_cost: Option<Decimal>,
    pub purchase_date: Option<String>,
    pub ownership_type: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,

    /// `Some(None)` borra la calificación
    #[serde(default, deserialize_with = "explicit_null")]
    pub rating: Option<Option<Decimal>>,

    #[validate(length(max = 2000))]
    #[serde(default, deserialize_with = "explicit_null")]
    pub description: Option<Option<String>>,

    pub images: Option<Vec<String>>,
    pub owner_info: Option<OwnerInfo>,
}

impl UpdateVehicleRequest {
    /// Aplica los campos informados sobre el registro actual
    pub fn apply(self, mut vehicle: Vehicle) -> AppResult<Vehicle> {
        if let Some(name) = self.name {
            vehicle.name = name;
        }
        if let Some(brand) = self.brand {
            vehicle.brand = brand;
        }
        if let Some(category) = self.category {
            vehicle.category = category;
        }
        if let Some(year) = self.year {
            vehicle.year = year;
        }
        if let Some(mileage) = self.mileage {
            vehicle.mileage = mileage;
        }
        if let Some(fuel) = self.fuel {
            vehicle.fuel = fuel.parse::<FuelType>()?;
        }
        if let Some(transmission) = self.transmission {
            vehicle.transmission = transmission.parse::<Transmission>()?;
        }
        if let Some(price) = self.price {
            vehicle.price = price;
        }
        if let Some(purchase_cost) = self.purchase_cost {
            vehicle.purchase_cost = purchase_cost;
        }
        if let Some(purchase_date) = self.purchase_date {
            vehicle.purchase_date = parse_date("purchase_date", &purchase_date)?;
        }
        if let Some(ownership_type) = self.ownership_type {
            vehicle.ownership_type = ownership_type.parse::<OwnershipType>()?;
        }
        if let Some(status) = self.status {
            vehicle.status = status.parse::<VehicleStatus>()?;
        }
        if let Some(featured) = self.featured {
            vehicle.featured = featured;
        }
        if let Some(rating) = self.rating {
            vehicle.rating = rating;
        }
        if let Some(description) = self.description {
            vehicle.description = description;
        }
        if let Some(images) = self.images {
            vehicle.images = images;
        }
        if self.owner_info.is_some() {
            vehicle.owner_info = self.owner_info;
        }
        if vehicle.ownership_type == OwnershipType::Owned {
            vehicle.owner_info = None;
        }
        Ok(vehicle)
    }
}

// Request para registrar una venta
#[derive(Debug, Deserialize, Validate)]
pub struct SellVehicleRequest {
    #[validate(length(min = 1, max = 120))]
    pub buyer_name: String,

    #[validate(length(min = 1, max = 40))]
    pub buyer_document: String,

    pub payment_method: String,
    pub sale_price: Decimal,
    /// Si falta se usa la fecha de hoy
    pub sale_date: Option<String>,
    pub commission: Option<Decimal>,
}

impl SellVehicleRequest {
    pub fn into_sale_request(self) -> AppResult<SaleRequest> {
        let sale_date = match &self.sale_date {
            Some(date) => parse_date("sale_date", date)?,
            None => Utc::now().date_naive(),
        };

        Ok(SaleRequest {
            buyer: BuyerDetails {
                name: self.buyer_name,
                document: self.buyer_document,
            },
            sale_price: self.sale_price,
            payment_method: self.payment_method.parse::<PaymentMethod>()?,
            sale_date,
            commission: self.commission,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AttachFeatureRequest {
    pub feature_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct SelectFeatureRequest {
    pub selected: bool,
}

// Filtros del catálogo recibidos por query string
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub fuel: Option<String>,
    pub transmission: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub sort: Option<String>,
}

impl CatalogQuery {
    pub fn into_filter(self) -> AppResult<CatalogFilter> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Ok(CatalogFilter {
            fuel: non_empty(self.fuel).map(|v| v.parse::<FuelType>()).transpose()?,
            transmission: non_empty(self.transmission)
                .map(|v| v.parse::<Transmission>())
                .transpose()?,
            min_price: non_empty(self.min_price)
                .map(|v| parse_decimal("min_price", &v))
                .transpose()?,
            max_price: non_empty(self.max_price)
                .map(|v| parse_decimal("max_price", &v))
                .transpose()?,
            sort: non_empty(self.sort).map(|v| v.parse::<SortOrder>()).transpose()?,
            search: non_empty(self.search),
            brand: non_empty(self.brand),
            category: non_empty(self.category),
            min_year: self.min_year,
            max_year: self.max_year,
        })
    }
}

// Response de vehículo: el registro más su precio cotizado actual
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub quoted_price: Decimal,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            quoted_price: quoted_price(&vehicle),
            vehicle,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SaleResponse {
    pub vehicle: VehicleResponse,
    pub outcome: SaleOutcome,
}

impl From<SaleReceipt> for SaleResponse {
    fn from(receipt: SaleReceipt) -> Self {
        Self {
            vehicle: receipt.vehicle.into(),
            outcome: receipt.outcome,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub total: usize,
    pub vehicles: Vec<VehicleResponse>,
    pub facets: CatalogFacets,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub url: String,
    pub message: String,
}
