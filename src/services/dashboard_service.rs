//! Indicadores del panel administrativo

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{SaleOutcome, Vehicle, VehicleStatus};
use crate::utils::errors::{validation_error, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub total_vehicles: usize,
    pub available: usize,
    pub consigned: usize,
    pub sold: usize,
    /// Suma del precio de lista de lo que sigue en stock
    pub stock_value: Decimal,
    pub revenue: Decimal,
    pub total_profit: Decimal,
    pub total_commission: Decimal,
}

pub fn inventory_stats(vehicles: &[Vehicle]) -> AppResult<InventoryStats> {
    let mut stats = InventoryStats::default();

    for vehicle in vehicles {
        stats.total_vehicles += 1;
        match vehicle.status {
            VehicleStatus::Available => stats.available += 1,
            VehicleStatus::Consigned => stats.consigned += 1,
            VehicleStatus::Sold => stats.sold += 1,
        }

        match &vehicle.buyer_info {
            Some(buyer) if vehicle.is_sold() => {
                stats.revenue = accumulate("revenue", stats.revenue, buyer.sale_price)?;
                match buyer.outcome() {
                    Some(SaleOutcome::Profit(profit)) => {
                        stats.total_profit = accumulate("total_profit", stats.total_profit, profit)?
                    }
                    Some(SaleOutcome::Commission(commission)) => {
                        stats.total_commission =
                            accumulate("total_commission", stats.total_commission, commission)?
                    }
                    None => {}
                }
            }
            _ => stats.stock_value = accumulate("stock_value", stats.stock_value, vehicle.price)?,
        }
    }

    Ok(stats)
}

fn accumulate(field: &str, total: Decimal, amount: Decimal) -> AppResult<Decimal> {
    total.checked_add(amount).ok_or_else(|| {
        log::warn!("❌ Total {} fuera de rango", field);
        validation_error(field, "total exceeds the supported range")
    })
}
