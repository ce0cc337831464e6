//! Modelos del sistema
//!
//! Este módulo contiene las entidades del inventario: vehículos, adicionales,
//! compradores y propietarios en consignación.

pub mod feature;
pub mod owner;
pub mod sale;
pub mod vehicle;

pub use feature::{AdditionalFeature, CatalogFeature};
pub use owner::OwnerInfo;
pub use sale::{BuyerInfo, PaymentMethod, SaleOutcome};
pub use vehicle::{
    validate_vehicle, FuelType, NewVehicle, OwnershipType, Transmission, Vehicle, VehicleStatus,
};

/// Normaliza una etiqueta de enum recibida como texto:
/// minúsculas y sin espacios, guiones ni guiones bajos.
pub(crate) fn normalize_label(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
