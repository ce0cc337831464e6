//! Adicionales (opcionales con precio)
//!
//! El catálogo global y la copia embebida en cada vehículo son entidades
//! distintas: sólo la copia lleva el estado `selected`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::errors::AppResult;
use crate::utils::validation::{check_field, validate_non_negative, validate_not_empty};

/// Adicional definido en el catálogo global de la concesionaria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFeature {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
}

/// Copia de un adicional asociada a un vehículo concreto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalFeature {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub selected: bool,
}

impl AdditionalFeature {
    pub fn validate(&self) -> AppResult<()> {
        check_field("feature.name", validate_not_empty(&self.name))?;
        check_field("feature.price", validate_non_negative(self.price))
    }
}

impl From<&CatalogFeature> for AdditionalFeature {
    fn from(feature: &CatalogFeature) -> Self {
        Self {
            id: feature.id,
            name: feature.name.clone(),
            price: feature.price,
            selected: false,
        }
    }
}
