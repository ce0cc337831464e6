//! Servicio de precios
//!
//! Precio cotizado (base + adicionales seleccionados) y resultado
//! financiero de una venta (lucro o comisión).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{OwnershipType, SaleOutcome, Vehicle};
use crate::utils::errors::{invalid_sale_state_error, validation_error, AppResult};
use crate::utils::validation::{check_field, validate_non_negative, validate_range};

/// Política comercial configurable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Fracción del precio de venta cobrada como comisión cuando el operador
    /// no informa un monto explícito (0.05 = 5%)
    pub default_commission_rate: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            default_commission_rate: Decimal::new(5, 2),
        }
    }
}

impl PricingPolicy {
    pub fn new(default_commission_rate: Decimal) -> AppResult<Self> {
        check_field(
            "default_commission_rate",
            validate_range(default_commission_rate, Decimal::ZERO, Decimal::ONE),
        )?;
        Ok(Self {
            default_commission_rate,
        })
    }
}

/// Desglose del precio cotizado de un vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub base_price: Decimal,
    pub features_total: Decimal,
    pub quoted_price: Decimal,
}

/// Suma de los adicionales marcados en esta instancia del vehículo
pub fn selected_features_total(vehicle: &Vehicle) -> Decimal {
    vehicle.selected_features().map(|f| f.price).sum()
}

/// Precio base más todos los adicionales seleccionados.
///
/// No desborda para vehículos validados: `validate_vehicle` acota la suma
/// del precio con todos sus adicionales.
pub fn quoted_price(vehicle: &Vehicle) -> Decimal {
    vehicle.price + selected_features_total(vehicle)
}

pub fn quote(vehicle: &Vehicle) -> PriceQuote {
    let features_total = selected_features_total(vehicle);
    PriceQuote {
        base_price: vehicle.price,
        features_total,
        quoted_price: vehicle.price + features_total,
    }
}

/// Resultado financiero de vender `vehicle` por `sale_price`.
///
/// Vehículos propios: lucro = precio de venta - costo de compra (puede ser
/// negativo). Consignación: la comisión informada o, si no hay, la tasa por
/// defecto de la política aplicada al precio de venta.
pub fn sale_outcome(
    vehicle: &Vehicle,
    sale_price: Decimal,
    commission: Option<Decimal>,
    policy: &PricingPolicy,
) -> AppResult<SaleOutcome> {
    if vehicle.is_sold() {
        return Err(invalid_sale_state_error(vehicle.id, "vehicle is already sold"));
    }
    check_field("sale_price", validate_non_negative(sale_price))?;

    match vehicle.ownership_type {
        OwnershipType::Owned => {
            if commission.is_some() {
                return Err(validation_error(
                    "commission",
                    "only applies to consignment vehicles",
                ));
            }
            Ok(SaleOutcome::Profit(sale_price - vehicle.purchase_cost))
        }
        OwnershipType::Consignment => {
            let amount = match commission {
                Some(amount) => {
                    check_field("commission", validate_non_negative(amount))?;
                    amount
                }
                None => sale_price
                    .checked_mul(policy.default_commission_rate)
                    .ok_or_else(|| {
                        validation_error("sale_price", "commission exceeds the supported range")
                    })?
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            };
            Ok(SaleOutcome::Commission(amount))
        }
    }
}
