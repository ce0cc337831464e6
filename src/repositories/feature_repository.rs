//! Catálogo global de adicionales
//!
//! Eliminar un adicional del catálogo no afecta las copias ya asociadas
//! a los vehículos.

use rust_decimal::Decimal;

use crate::models::CatalogFeature;
use crate::utils::errors::AppResult;
use crate::utils::validation::{check_field, validate_non_negative, validate_not_empty};

#[derive(Debug, Default, Clone)]
pub struct FeatureCatalog {
    features: Vec<CatalogFeature>,
}

impl FeatureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, price: Decimal) -> AppResult<CatalogFeature> {
        check_field("name", validate_not_empty(name))?;
        check_field("price", validate_non_negative(price))?;

        let id = self.features.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let feature = CatalogFeature {
            id,
            name: name.trim().to_string(),
            price,
        };

        log::info!("➕ Adicional {} agregado al catálogo: {}", id, feature.name);
        self.features.push(feature.clone());
        Ok(feature)
    }

    pub fn delete(&mut self, id: u64) {
        let before = self.features.len();
        self.features.retain(|f| f.id != id);
        if self.features.len() < before {
            log::info!("🗑️ Adicional {} eliminado del catálogo", id);
        }
    }

    pub fn get(&self, id: u64) -> Option<CatalogFeature> {
        self.features.iter().find(|f| f.id == id).cloned()
    }

    pub fn list(&self) -> Vec<CatalogFeature> {
        self.features.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_get_delete() {
        let mut catalog = FeatureCatalog::new();
        let night = catalog.add("Pacote Night", Decimal::from(7_500)).unwrap();
        let hud = catalog.add(" Head-up Display ", Decimal::from(6_000)).unwrap();

        assert_eq!(night.id, 1);
        assert_eq!(hud.id, 2);
        assert_eq!(hud.name, "Head-up Display");
        assert_eq!(catalog.get(1), Some(night));

        catalog.delete(1);
        catalog.delete(1);
        assert!(catalog.get(1).is_none());
        assert_eq!(catalog.list(), vec![hud]);
    }

    #[test]
    fn test_rejects_invalid_features() {
        let mut catalog = FeatureCatalog::new();
        assert!(catalog.add("", Decimal::from(100)).is_err());
        assert!(catalog.add("Som", Decimal::from(-1)).is_err());
        assert!(catalog.list().is_empty());
    }
}
