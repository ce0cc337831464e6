//! Services module
//!
//! Este módulo contiene la lógica de negocio del inventario: precios,
//! ventas, búsqueda en el catálogo, indicadores y contacto.

pub mod catalog_service;
pub mod contact_service;
pub mod dashboard_service;
pub mod pricing_service;
pub mod transaction_service;

pub use pricing_service::{quoted_price, sale_outcome, PricingPolicy, PriceQuote};
pub use transaction_service::{mark_sold, BuyerDetails, SaleReceipt, SaleRequest};
