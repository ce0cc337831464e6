//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle, sus enums cerrados y las reglas
//! de validación que deben cumplirse en cada alta o modificación.

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::feature::AdditionalFeature;
use super::normalize_label;
use super::owner::OwnerInfo;
use super::sale::BuyerInfo;
use crate::utils::errors::{invalid_enum_error, validation_error, AppError, AppResult};
use crate::utils::validation::{
    check_field, validate_non_negative, validate_not_empty, validate_range,
};

pub const MIN_MODEL_YEAR: i32 = 1900;

/// Estado comercial del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    Sold,
    /// En venta pero propiedad de un tercero
    Consigned,
}

/// Tipo de propiedad: determina si la venta genera lucro o comisión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnershipType {
    Owned,
    Consignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Gasoline,
    Ethanol,
    Flex,
    Diesel,
    Electric,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
    Cvt,
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for VehicleStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "available" | "disponível" | "disponivel" => Ok(VehicleStatus::Available),
            "sold" | "vendido" => Ok(VehicleStatus::Sold),
            "consigned" | "consignado" => Ok(VehicleStatus::Consigned),
            _ => Err(invalid_enum_error("status", s)),
        }
    }
}

impl fmt::Display for OwnershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for OwnershipType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "owned" | "próprio" | "proprio" => Ok(OwnershipType::Owned),
            "consignment" | "consignado" => Ok(OwnershipType::Consignment),
            _ => Err(invalid_enum_error("ownership_type", s)),
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for FuelType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "gasoline" | "gasolina" => Ok(FuelType::Gasoline),
            "ethanol" | "etanol" => Ok(FuelType::Ethanol),
            "flex" => Ok(FuelType::Flex),
            "diesel" => Ok(FuelType::Diesel),
            "electric" | "elétrico" | "eletrico" => Ok(FuelType::Electric),
            "hybrid" | "híbrido" | "hibrido" => Ok(FuelType::Hybrid),
            _ => Err(invalid_enum_error("fuel", s)),
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transmission::Cvt => f.write_str("CVT"),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

impl FromStr for Transmission {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "manual" => Ok(Transmission::Manual),
            "automatic" | "automático" | "automatico" => Ok(Transmission::Automatic),
            "cvt" => Ok(Transmission::Cvt),
            _ => Err(invalid_enum_error("transmission", s)),
        }
    }
}

/// Vehicle principal del inventario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u64,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub year: i32,
    pub mileage: i64,
    pub fuel: FuelType,
    pub transmission: Transmission,
    pub price: Decimal,
    /// Sólo tiene sentido para vehículos propios
    pub purchase_cost: Decimal,
    pub purchase_date: NaiveDate,
    pub status: VehicleStatus,
    pub ownership_type: OwnershipType,
    pub sale_date: Option<NaiveDate>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub additional_features: Vec<AdditionalFeature>,
    #[serde(default)]
    pub buyer_info: Option<BuyerInfo>,
    #[serde(default)]
    pub owner_info: Option<OwnerInfo>,
}

/// Vehículo aún sin id; el repositorio lo asigna en el alta
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVehicle {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub year: i32,
    pub mileage: i64,
    pub fuel: FuelType,
    pub transmission: Transmission,
    pub price: Decimal,
    pub purchase_cost: Decimal,
    pub purchase_date: NaiveDate,
    pub status: VehicleStatus,
    pub ownership_type: OwnershipType,
    pub sale_date: Option<NaiveDate>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub additional_features: Vec<AdditionalFeature>,
    #[serde(default)]
    pub buyer_info: Option<BuyerInfo>,
    #[serde(default)]
    pub owner_info: Option<OwnerInfo>,
}

impl NewVehicle {
    pub fn with_id(self, id: u64) -> Vehicle {
        Vehicle {
            id,
            name: self.name,
            brand: self.brand,
            category: self.category,
            year: self.year,
            mileage: self.mileage,
            fuel: self.fuel,
            transmission: self.transmission,
            price: self.price,
            purchase_cost: self.purchase_cost,
            purchase_date: self.purchase_date,
            status: self.status,
            ownership_type: self.ownership_type,
            sale_date: self.sale_date,
            featured: self.featured,
            rating: self.rating,
            description: self.description,
            images: self.images,
            additional_features: self.additional_features,
            buyer_info: self.buyer_info,
            owner_info: self.owner_info,
        }
    }
}

impl Vehicle {
    pub fn is_sold(&self) -> bool {
        self.status == VehicleStatus::Sold
    }

    /// Disponible o en consignación: lo que ve el catálogo público
    pub fn is_for_sale(&self) -> bool {
        !self.is_sold()
    }

    pub fn selected_features(&self) -> impl Iterator<Item = &AdditionalFeature> {
        self.additional_features.iter().filter(|f| f.selected)
    }

    pub fn feature_mut(&mut self, feature_id: u64) -> Option<&mut AdditionalFeature> {
        self.additional_features.iter_mut().find(|f| f.id == feature_id)
    }

    /// Precio base más todos los adicionales, seleccionados o no.
    /// `None` si la suma no entra en un `Decimal`.
    pub fn max_quoted_price(&self) -> Option<Decimal> {
        self.additional_features
            .iter()
            .try_fold(self.price, |total, f| total.checked_add(f.price))
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_vehicle(self)
    }
}

/// Año de modelo más reciente aceptado (el año siguiente al actual)
pub fn max_model_year() -> i32 {
    Utc::now().year() + 1
}

/// Validar un vehículo completo: campos, rangos y coherencia entre
/// estado, tipo de propiedad, comprador y propietario
pub fn validate_vehicle(v: &Vehicle) -> AppResult<()> {
    check_field("name", validate_not_empty(&v.name))?;
    check_field("brand", validate_not_empty(&v.brand))?;
    check_field("category", validate_not_empty(&v.category))?;
    check_field("year", validate_range(v.year, MIN_MODEL_YEAR, max_model_year()))?;
    check_field("mileage", validate_non_negative(v.mileage))?;
    check_field("price", validate_non_negative(v.price))?;
    check_field("purchase_cost", validate_non_negative(v.purchase_cost))?;
    if let Some(rating) = v.rating {
        check_field("rating", validate_range(rating, Decimal::ZERO, Decimal::from(5)))?;
    }

    for (index, feature) in v.additional_features.iter().enumerate() {
        feature.validate()?;
        if v.additional_features[..index].iter().any(|f| f.id == feature.id) {
            return Err(validation_error(
                "additional_features",
                &format!("feature id {} attached more than once", feature.id),
            ));
        }
    }

    // con precios no negativos, cualquier selección queda acotada por este total
    if v.max_quoted_price().is_none() {
        return Err(validation_error(
            "price",
            "price plus add-ons exceeds the supported range",
        ));
    }

    validate_ownership(v)?;
    validate_sale_state(v)
}

fn validate_ownership(v: &Vehicle) -> AppResult<()> {
    match (v.ownership_type, &v.owner_info) {
        (OwnershipType::Consignment, None) => {
            return Err(validation_error(
                "owner_info",
                "required for consignment vehicles",
            ))
        }
        (OwnershipType::Consignment, Some(owner)) => owner.validate()?,
        (OwnershipType::Owned, Some(_)) => {
            return Err(validation_error(
                "owner_info",
                "only allowed for consignment vehicles",
            ))
        }
        (OwnershipType::Owned, None) => {}
    }

    if v.status == VehicleStatus::Consigned && v.ownership_type != OwnershipType::Consignment {
        return Err(validation_error(
            "status",
            "Consigned status requires consignment ownership",
        ));
    }
    Ok(())
}

fn validate_sale_state(v: &Vehicle) -> AppResult<()> {
    match (v.status, &v.buyer_info, v.sale_date) {
        (VehicleStatus::Sold, Some(buyer), Some(sale_date)) => {
            buyer.validate()?;
            if buyer.sale_date != sale_date {
                return Err(validation_error(
                    "buyer_info.sale_date",
                    "must match the vehicle sale date",
                ));
            }
            let consistent = match v.ownership_type {
                OwnershipType::Owned => buyer.profit.is_some() && buyer.commission.is_none(),
                OwnershipType::Consignment => {
                    buyer.commission.is_some() && buyer.profit.is_none()
                }
            };
            if !consistent {
                return Err(validation_error(
                    "buyer_info",
                    "owned sales carry profit only, consignment sales carry commission only",
                ));
            }
            Ok(())
        }
        (VehicleStatus::Sold, _, _) => Err(validation_error(
            "status",
            "a sold vehicle needs buyer info and a sale date",
        )),
        (_, Some(_), _) | (_, _, Some(_)) => Err(validation_error(
            "status",
            "buyer info and sale date are only allowed on sold vehicles",
        )),
        _ => Ok(()),
    }
}
