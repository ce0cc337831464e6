//! Repositorios en memoria
//!
//! Inventario de vehículos y catálogo global de adicionales.

pub mod feature_repository;
pub mod seed;
pub mod vehicle_repository;

pub use feature_repository::FeatureCatalog;
pub use vehicle_repository::InventoryRepository;
