//! Servicio de transacciones
//!
//! Lleva un vehículo de Disponible/Consignado a Vendido: valida el estado,
//! calcula el resultado financiero y escribe el registro a través del
//! repositorio. No existe la transición inversa.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BuyerInfo, PaymentMethod, SaleOutcome, Vehicle, VehicleStatus};
use crate::repositories::vehicle_repository::InventoryRepository;
use crate::services::pricing_service::{sale_outcome, PricingPolicy};
use crate::utils::errors::{invalid_sale_state_error, not_found_error, AppResult};

/// Identificación del comprador
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerDetails {
    pub name: String,
    pub document: String,
}

/// Solicitud de venta emitida por el operador
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRequest {
    pub buyer: BuyerDetails,
    pub sale_price: Decimal,
    pub payment_method: PaymentMethod,
    pub sale_date: NaiveDate,
    /// Comisión explícita (sólo consignación); si falta se usa la tasa por defecto
    pub commission: Option<Decimal>,
}

/// Vehículo ya vendido junto con su resultado financiero
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleReceipt {
    pub vehicle: Vehicle,
    pub outcome: SaleOutcome,
}

/// Marca el vehículo como vendido.
///
/// El chequeo de estado y la escritura ocurren con el mismo `&mut`
/// sobre el repositorio, por lo que un vehículo no puede venderse dos veces.
pub fn mark_sold(
    repository: &mut InventoryRepository,
    policy: &PricingPolicy,
    vehicle_id: u64,
    request: SaleRequest,
) -> AppResult<SaleReceipt> {
    let vehicle = repository
        .get_by_id(vehicle_id)
        .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;

    if vehicle.is_sold() {
        log::warn!("❌ Venta rechazada: vehículo {} ya fue vendido", vehicle_id);
        return Err(invalid_sale_state_error(vehicle_id, "vehicle is already sold"));
    }

    let outcome = sale_outcome(&vehicle, request.sale_price, request.commission, policy)?;

    let mut sold = vehicle;
    sold.status = VehicleStatus::Sold;
    sold.sale_date = Some(request.sale_date);
    sold.buyer_info = Some(BuyerInfo {
        name: request.buyer.name,
        document: request.buyer.document,
        payment_method: request.payment_method,
        sale_date: request.sale_date,
        sale_price: request.sale_price,
        commission: outcome.commission(),
        profit: outcome.profit(),
    });

    let vehicle = repository.update(sold)?;
    match outcome {
        SaleOutcome::Profit(profit) => log::info!(
            "💰 Vehículo {} vendido por {} (lucro {})",
            vehicle_id,
            request.sale_price,
            profit
        ),
        SaleOutcome::Commission(commission) => log::info!(
            "🤝 Vehículo {} en consignación vendido por {} (comisión {})",
            vehicle_id,
            request.sale_price,
            commission
        ),
    }

    Ok(SaleReceipt { vehicle, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FuelType, NewVehicle, OwnerInfo, OwnershipType, Transmission};
    use crate::utils::errors::AppError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_vehicle(ownership_type: OwnershipType) -> NewVehicle {
        let consignment = ownership_type == OwnershipType::Consignment;
        NewVehicle {
            name: "Range Rover Evoque".to_string(),
            brand: "Land Rover".to_string(),
            category: "SUV".to_string(),
            year: 2022,
            mileage: 25_000,
            fuel: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            price: Decimal::from(320_000),
            purchase_cost: if consignment { Decimal::ZERO } else { Decimal::from(280_000) },
            purchase_date: date(2022, 11, 5),
            status: if consignment { VehicleStatus::Consigned } else { VehicleStatus::Available },
            ownership_type,
            sale_date: None,
            featured: false,
            rating: None,
            description: None,
            images: vec![],
            additional_features: vec![],
            buyer_info: None,
            owner_info: consignment.then(|| OwnerInfo {
                name: "Paulo Reis".to_string(),
                document: "555".to_string(),
                phone: "+55 11 97777-6666".to_string(),
                email: None,
                address: Some("Rua Augusta, 10".to_string()),
            }),
        }
    }

    fn request(sale_price: i64) -> SaleRequest {
        SaleRequest {
            buyer: BuyerDetails {
                name: "Ana Costa".to_string(),
                document: "222.333.444-55".to_string(),
            },
            sale_price: Decimal::from(sale_price),
            payment_method: PaymentMethod::Financing,
            sale_date: date(2024, 6, 10),
            commission: None,
        }
    }

    #[test]
    fn test_mark_sold_owned_vehicle() {
        let mut repo = InventoryRepository::new();
        let policy = PricingPolicy::default();
        let vehicle = repo.add(new_vehicle(OwnershipType::Owned)).unwrap();

        let receipt = mark_sold(&mut repo, &policy, vehicle.id, request(310_000)).unwrap();
        assert_eq!(receipt.outcome, SaleOutcome::Profit(Decimal::from(30_000)));

        let stored = repo.get_by_id(vehicle.id).unwrap();
        assert_eq!(stored, receipt.vehicle);
        assert_eq!(stored.status, VehicleStatus::Sold);
        assert_eq!(stored.sale_date, Some(date(2024, 6, 10)));

        let buyer = stored.buyer_info.unwrap();
        assert_eq!(buyer.name, "Ana Costa");
        assert_eq!(buyer.payment_method, PaymentMethod::Financing);
        assert_eq!(buyer.profit, Some(Decimal::from(30_000)));
        assert_eq!(buyer.commission, None);
    }

    #[test]
    fn test_mark_sold_consigned_vehicle_keeps_owner() {
        let mut repo = InventoryRepository::new();
        let policy = PricingPolicy::default();
        let vehicle = repo.add(new_vehicle(OwnershipType::Consignment)).unwrap();

        let receipt = mark_sold(&mut repo, &policy, vehicle.id, request(200_000)).unwrap();
        assert_eq!(receipt.outcome, SaleOutcome::Commission(Decimal::from(10_000)));

        let stored = repo.get_by_id(vehicle.id).unwrap();
        assert_eq!(stored.ownership_type, OwnershipType::Consignment);
        assert!(stored.owner_info.is_some());
        let buyer = stored.buyer_info.unwrap();
        assert_eq!(buyer.commission, Some(Decimal::from(10_000)));
        assert_eq!(buyer.profit, None);
    }

    #[test]
    fn test_second_sale_is_rejected() {
        let mut repo = InventoryRepository::new();
        let policy = PricingPolicy::default();
        let vehicle = repo.add(new_vehicle(OwnershipType::Owned)).unwrap();

        mark_sold(&mut repo, &policy, vehicle.id, request(300_000)).unwrap();
        let err = mark_sold(&mut repo, &policy, vehicle.id, request(999_999)).unwrap_err();
        assert!(matches!(err, AppError::InvalidSaleState(_)));

        let buyer = repo.get_by_id(vehicle.id).unwrap().buyer_info.unwrap();
        assert_eq!(buyer.sale_price, Decimal::from(300_000));
    }

    #[test]
    fn test_unknown_vehicle_is_not_found() {
        let mut repo = InventoryRepository::new();
        let err = mark_sold(&mut repo, &PricingPolicy::default(), 77, request(1)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_invalid_buyer_leaves_vehicle_untouched() {
        let mut repo = InventoryRepository::new();
        let vehicle = repo.add(new_vehicle(OwnershipType::Owned)).unwrap();

        let mut bad = request(300_000);
        bad.buyer.name = "  ".to_string();
        assert!(mark_sold(&mut repo, &PricingPolicy::default(), vehicle.id, bad).is_err());
        assert_eq!(repo.get_by_id(vehicle.id).unwrap().status, VehicleStatus::Available);
    }

    #[test]
    fn test_sold_vehicle_leaves_available_list() {
        let mut repo = InventoryRepository::new();
        let vehicle = repo.add(new_vehicle(OwnershipType::Owned)).unwrap();
        assert_eq!(repo.list_available().len(), 1);

        mark_sold(&mut repo, &PricingPolicy::default(), vehicle.id, request(300_000)).unwrap();
        assert!(repo.list_available().is_empty());
        assert_eq!(repo.list_sold().len(), 1);
    }
}
