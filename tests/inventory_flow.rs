use chrono::NaiveDate;
use rust_decimal::Decimal;

use dealership_inventory::models::{
    AdditionalFeature, FuelType, NewVehicle, OwnerInfo, OwnershipType, PaymentMethod,
    SaleOutcome, Transmission, VehicleStatus,
};
use dealership_inventory::repositories::InventoryRepository;
use dealership_inventory::services::{
    mark_sold, quoted_price, BuyerDetails, PricingPolicy, SaleRequest,
};
use dealership_inventory::utils::errors::AppError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn test_car(price: i64, purchase_cost: i64) -> NewVehicle {
    NewVehicle {
        name: "Test Car".to_string(),
        brand: "Test".to_string(),
        category: "Sedan".to_string(),
        year: 2023,
        mileage: 0,
        fuel: FuelType::Flex,
        transmission: Transmission::Manual,
        price: Decimal::from(price),
        purchase_cost: Decimal::from(purchase_cost),
        purchase_date: date(2023, 1, 1),
        status: VehicleStatus::Available,
        ownership_type: OwnershipType::Owned,
        sale_date: None,
        featured: false,
        rating: None,
        description: None,
        images: vec![],
        additional_features: vec![],
        buyer_info: None,
        owner_info: None,
    }
}

fn consigned_car(price: i64) -> NewVehicle {
    NewVehicle {
        status: VehicleStatus::Consigned,
        ownership_type: OwnershipType::Consignment,
        purchase_cost: Decimal::ZERO,
        owner_info: Some(OwnerInfo {
            name: "Maria Souza".to_string(),
            document: "123.456.789-00".to_string(),
            phone: "11988887777".to_string(),
            email: Some("maria@example.com".to_string()),
            address: None,
        }),
        ..test_car(price, 0)
    }
}

fn sale(sale_price: i64) -> SaleRequest {
    SaleRequest {
        buyer: BuyerDetails {
            name: "João Silva".to_string(),
            document: "987.654.321-00".to_string(),
        },
        sale_price: Decimal::from(sale_price),
        payment_method: PaymentMethod::Cash,
        sale_date: date(2024, 3, 15),
        commission: None,
    }
}

#[test]
fn test_full_owned_sale_flow() {
    let mut repo = InventoryRepository::new();
    let policy = PricingPolicy::default();

    let mut new_car = test_car(100_000, 80_000);
    new_car.additional_features = vec![AdditionalFeature {
        id: 1,
        name: "Sunroof".to_string(),
        price: Decimal::from(5_000),
        selected: false,
    }];
    let car = repo.add(new_car).unwrap();
    assert_eq!(quoted_price(&car), Decimal::from(100_000));

    let car = repo.set_feature_selected(car.id, 1, true).unwrap();
    assert_eq!(quoted_price(&car), Decimal::from(105_000));

    let receipt = mark_sold(&mut repo, &policy, car.id, sale(105_000)).unwrap();
    assert_eq!(receipt.outcome, SaleOutcome::Profit(Decimal::from(25_000)));

    let stored = repo.get_by_id(car.id).unwrap();
    assert_eq!(stored.status, VehicleStatus::Sold);
    assert_eq!(stored.sale_date, Some(date(2024, 3, 15)));
    assert_eq!(
        stored.buyer_info.as_ref().and_then(|b| b.profit),
        Some(Decimal::from(25_000))
    );
    assert!(repo.list_available().iter().all(|v| v.id != car.id));
    assert!(repo.list_sold().iter().any(|v| v.id == car.id));
}

#[test]
fn test_profit_can_be_negative() {
    let mut repo = InventoryRepository::new();
    let policy = PricingPolicy::default();

    let gain = repo.add(test_car(500_000, 400_000)).unwrap();
    let loss = repo.add(test_car(500_000, 400_000)).unwrap();

    let receipt = mark_sold(&mut repo, &policy, gain.id, sale(500_000)).unwrap();
    assert_eq!(receipt.outcome.profit(), Some(Decimal::from(100_000)));

    let receipt = mark_sold(&mut repo, &policy, loss.id, sale(350_000)).unwrap();
    assert_eq!(receipt.outcome.profit(), Some(Decimal::from(-50_000)));
}

#[test]
fn test_consignment_sale_uses_default_commission() {
    let mut repo = InventoryRepository::new();
    let car = repo.add(consigned_car(210_000)).unwrap();

    let receipt = mark_sold(&mut repo, &PricingPolicy::default(), car.id, sale(200_000)).unwrap();
    assert_eq!(receipt.outcome, SaleOutcome::Commission(Decimal::from(10_000)));
    assert_eq!(receipt.outcome.profit(), None);
    assert!(receipt.vehicle.owner_info.is_some());
}

#[test]
fn test_consignment_sale_with_explicit_commission() {
    let mut repo = InventoryRepository::new();
    let car = repo.add(consigned_car(210_000)).unwrap();

    let mut request = sale(200_000);
    request.commission = Some(Decimal::from(15_000));
    let receipt = mark_sold(&mut repo, &PricingPolicy::default(), car.id, request).unwrap();
    assert_eq!(receipt.outcome.commission(), Some(Decimal::from(15_000)));
}

#[test]
fn test_vehicle_cannot_be_sold_twice() {
    let mut repo = InventoryRepository::new();
    let policy = PricingPolicy::default();
    let car = repo.add(test_car(100_000, 80_000)).unwrap();

    mark_sold(&mut repo, &policy, car.id, sale(100_000)).unwrap();
    let err = mark_sold(&mut repo, &policy, car.id, sale(120_000)).unwrap_err();
    assert!(matches!(err, AppError::InvalidSaleState(_)));

    let buyer = repo.get_by_id(car.id).unwrap().buyer_info.unwrap();
    assert_eq!(buyer.sale_price, Decimal::from(100_000));
}

#[test]
fn test_delete_is_idempotent() {
    let mut repo = InventoryRepository::new();
    let car = repo.add(test_car(100_000, 80_000)).unwrap();

    repo.delete(car.id);
    assert!(repo.get_by_id(car.id).is_none());
    repo.delete(car.id);
    assert!(repo.list_all().is_empty());
}

#[test]
fn test_added_vehicle_reads_back_equal() {
    let mut repo = InventoryRepository::new();
    let first = repo.add(test_car(100_000, 80_000)).unwrap();
    let second = repo.add(test_car(90_000, 70_000)).unwrap();

    assert_eq!(second.id, first.id + 1);
    assert_eq!(repo.get_by_id(first.id), Some(first));
    assert_eq!(repo.get_by_id(second.id), Some(second));
}

#[test]
fn test_invalid_vehicle_is_rejected() {
    let mut repo = InventoryRepository::new();
    let mut car = test_car(100_000, 80_000);
    car.price = Decimal::from(-1);

    let err = repo.add(car).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(repo.list_all().is_empty());
}
