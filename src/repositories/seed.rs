//! Inventario de demostración
//!
//! Los seis vehículos del showroom y el catálogo de adicionales con el que
//! arranca el servidor cuando `SEED_DEMO_INVENTORY` está activo.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    AdditionalFeature, CatalogFeature, FuelType, OwnershipType, Transmission, Vehicle,
    VehicleStatus,
};
use crate::repositories::feature_repository::FeatureCatalog;
use crate::repositories::vehicle_repository::InventoryRepository;
use crate::utils::errors::AppResult;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

const DEMO_FEATURES: [(&str, i64); 8] = [
    ("Teto Solar Panorâmico", 12_000),
    ("Sistema de Som Premium", 8_500),
    ("Assistente de Estacionamento", 5_000),
    ("Interior em Couro Nappa", 9_800),
    ("Pacote Off-road", 15_000),
    ("Pacote Night", 7_500),
    ("Head-up Display", 6_000),
    ("Sistema Burmester 3D", 12_000),
];

struct Showroom {
    name: &'static str,
    brand: &'static str,
    category: &'static str,
    year: i32,
    mileage: i64,
    fuel: FuelType,
    price: i64,
    purchase_cost: i64,
    purchase_date: (i32, u32, u32),
    featured: bool,
    rating: Option<i64>,
    feature_ids: &'static [u64],
}

const SHOWROOM: [Showroom; 6] = [
    Showroom {
        name: "BMW X5 M50i",
        brand: "BMW",
        category: "SUV",
        year: 2023,
        mileage: 12_000,
        fuel: FuelType::Gasoline,
        price: 485_000,
        purchase_cost: 420_000,
        purchase_date: (2023, 1, 15),
        featured: true,
        rating: Some(49),
        feature_ids: &[1, 2, 3, 4, 5],
    },
    Showroom {
        name: "Mercedes-AMG C43",
        brand: "Mercedes",
        category: "Sedan",
        year: 2023,
        mileage: 8_500,
        fuel: FuelType::Gasoline,
        price: 420_000,
        purchase_cost: 360_000,
        purchase_date: (2023, 2, 10),
        featured: true,
        rating: Some(48),
        feature_ids: &[6, 7, 8],
    },
    Showroom {
        name: "Audi RS6 Avant",
        brand: "Audi",
        category: "Wagon",
        year: 2024,
        mileage: 2_100,
        fuel: FuelType::Gasoline,
        price: 680_000,
        purchase_cost: 590_000,
        purchase_date: (2024, 1, 5),
        featured: true,
        rating: Some(50),
        feature_ids: &[],
    },
    Showroom {
        name: "Porsche 911 Turbo S",
        brand: "Porsche",
        category: "Esportivo",
        year: 2024,
        mileage: 500,
        fuel: FuelType::Gasoline,
        price: 1_200_000,
        purchase_cost: 1_050_000,
        purchase_date: (2024, 2, 20),
        featured: false,
        rating: None,
        feature_ids: &[],
    },
    Showroom {
        name: "Tesla Model S",
        brand: "Tesla",
        category: "Sedan",
        year: 2023,
        mileage: 15_000,
        fuel: FuelType::Electric,
        price: 650_000,
        purchase_cost: 580_000,
        purchase_date: (2023, 8, 12),
        featured: false,
        rating: None,
        feature_ids: &[],
    },
    Showroom {
        name: "Range Rover Evoque",
        brand: "Land Rover",
        category: "SUV",
        year: 2022,
        mileage: 25_000,
        fuel: FuelType::Gasoline,
        price: 320_000,
        purchase_cost: 280_000,
        purchase_date: (2022, 11, 5),
        featured: false,
        rating: None,
        feature_ids: &[],
    },
];

pub fn demo_features() -> Vec<CatalogFeature> {
    DEMO_FEATURES
        .iter()
        .zip(1u64..)
        .map(|(&(name, price), id)| CatalogFeature {
            id,
            name: name.to_string(),
            price: Decimal::from(price),
        })
        .collect()
}

pub fn demo_vehicles() -> Vec<Vehicle> {
    let features = demo_features();
    SHOWROOM
        .iter()
        .zip(1u64..)
        .map(|(car, id)| {
            let (y, m, d) = car.purchase_date;
            Vehicle {
                id,
                name: car.name.to_string(),
                brand: car.brand.to_string(),
                category: car.category.to_string(),
                year: car.year,
                mileage: car.mileage,
                fuel: car.fuel,
                transmission: Transmission::Automatic,
                price: Decimal::from(car.price),
                purchase_cost: Decimal::from(car.purchase_cost),
                purchase_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
                status: VehicleStatus::Available,
                ownership_type: OwnershipType::Owned,
                sale_date: None,
                featured: car.featured,
                rating: car.rating.map(|r| Decimal::new(r, 1)),
                description: None,
                images: vec![PLACEHOLDER_IMAGE.to_string()],
                additional_features: features
                    .iter()
                    .filter(|f| car.feature_ids.contains(&f.id))
                    .map(AdditionalFeature::from)
                    .collect(),
                buyer_info: None,
                owner_info: None,
            }
        })
        .collect()
}

/// Catálogo de adicionales de demostración
pub fn demo_catalog() -> AppResult<FeatureCatalog> {
    let mut catalog = FeatureCatalog::new();
    for feature in demo_features() {
        catalog.add(&feature.name, feature.price)?;
    }
    Ok(catalog)
}

pub fn demo_inventory() -> AppResult<InventoryRepository> {
    InventoryRepository::with_vehicles(demo_vehicles())
}
