//! Repositorio de vehículos en memoria
//!
//! Almacén autoritativo del inventario durante la vida del proceso.
//! Se inyecta explícitamente en quien lo necesite; no hay estado global.

use crate::models::{AdditionalFeature, CatalogFeature, NewVehicle, Vehicle, VehicleStatus};
use crate::utils::errors::{not_found_error, validation_error, AppResult};

#[derive(Debug, Default, Clone)]
pub struct InventoryRepository {
    vehicles: Vec<Vehicle>,
}

impl InventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crea el repositorio a partir de vehículos ya identificados (p. ej. el inventario demo)
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> AppResult<Self> {
        let mut repository = Self::new();
        for vehicle in vehicles {
            vehicle.validate()?;
            if repository.get_by_id(vehicle.id).is_some() {
                return Err(validation_error(
                    "id",
                    &format!("duplicate vehicle id {}", vehicle.id),
                ));
            }
            repository.vehicles.push(vehicle);
        }
        Ok(repository)
    }

    fn next_id(&self) -> u64 {
        self.vehicles.iter().map(|v| v.id).max().unwrap_or(0) + 1
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.vehicles.iter().position(|v| v.id == id)
    }

    /// Alta de un vehículo: id = (máximo id existente, o 0) + 1
    pub fn add(&mut self, new_vehicle: NewVehicle) -> AppResult<Vehicle> {
        let vehicle = new_vehicle.with_id(self.next_id());
        vehicle.validate()?;

        log::info!("🚗 Vehículo {} agregado: {}", vehicle.id, vehicle.name);
        self.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    /// Reemplaza el registro con el mismo id
    pub fn update(&mut self, vehicle: Vehicle) -> AppResult<Vehicle> {
        let index = self.position(vehicle.id).ok_or_else(|| {
            log::warn!("❌ Actualización rechazada: vehículo {} no existe", vehicle.id);
            not_found_error("Vehicle", vehicle.id)
        })?;
        vehicle.validate()?;

        log::info!("✏️ Vehículo {} actualizado", vehicle.id);
        self.vehicles[index] = vehicle.clone();
        Ok(vehicle)
    }

    /// Elimina el vehículo; borrar un id inexistente no es un error
    pub fn delete(&mut self, id: u64) {
        let before = self.vehicles.len();
        self.vehicles.retain(|v| v.id != id);
        if self.vehicles.len() < before {
            log::info!("🗑️ Vehículo {} eliminado", id);
        } else {
            log::debug!("Vehículo {} no existe, nada que eliminar", id);
        }
    }

    pub fn get_by_id(&self, id: u64) -> Option<Vehicle> {
        self.vehicles.iter().find(|v| v.id == id).cloned()
    }

    pub fn list_all(&self) -> Vec<Vehicle> {
        self.vehicles.clone()
    }

    pub fn list_available(&self) -> Vec<Vehicle> {
        self.filtered(|v| v.status == VehicleStatus::Available)
    }

    pub fn list_featured(&self) -> Vec<Vehicle> {
        self.filtered(|v| v.featured && v.status == VehicleStatus::Available)
    }

    pub fn list_sold(&self) -> Vec<Vehicle> {
        self.filtered(|v| v.status == VehicleStatus::Sold)
    }

    /// Disponibles y en consignación
    pub fn list_for_sale(&self) -> Vec<Vehicle> {
        self.filtered(Vehicle::is_for_sale)
    }

    fn filtered(&self, predicate: impl Fn(&Vehicle) -> bool) -> Vec<Vehicle> {
        let result: Vec<Vehicle> = self.vehicles.iter().filter(|&v| predicate(v)).cloned().collect();
        log::debug!("🔍 Consulta de inventario: {} vehículo(s)", result.len());
        result
    }

    /// Asocia una copia de un adicional del catálogo al vehículo, sin seleccionar
    pub fn attach_feature(&mut self, vehicle_id: u64, feature: &CatalogFeature) -> AppResult<Vehicle> {
        let mut vehicle = self
            .get_by_id(vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;

        if vehicle.additional_features.iter().any(|f| f.id == feature.id) {
            return Err(validation_error(
                "feature_id",
                &format!("feature {} already attached to vehicle {}", feature.id, vehicle_id),
            ));
        }

        vehicle.additional_features.push(AdditionalFeature::from(feature));
        self.update(vehicle)
    }

    /// Marca o desmarca un adicional del vehículo; el cambio es inmediato
    pub fn set_feature_selected(
        &mut self,
        vehicle_id: u64,
        feature_id: u64,
        selected: bool,
    ) -> AppResult<Vehicle> {
        let mut vehicle = self
            .get_by_id(vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;

        vehicle
            .feature_mut(feature_id)
            .ok_or_else(|| not_found_error("Feature", feature_id))?
            .selected = selected;

        log::debug!(
            "Adicional {} del vehículo {} seleccionado={}",
            feature_id,
            vehicle_id,
            selected
        );
        self.update(vehicle)
    }
}
