//! Modelo de venta: comprador, forma de pago y resultado financiero

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::normalize_label;
use crate::utils::errors::{invalid_enum_error, AppError, AppResult};
use crate::utils::validation::{check_field, validate_non_negative, validate_not_empty};

/// Forma de pago aceptada en la venta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Financing,
    CreditCard,
    TradeIn,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Financing,
        PaymentMethod::CreditCard,
        PaymentMethod::TradeIn,
    ];
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Financing => "Financing",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::TradeIn => "Trade-in",
        };
        f.write_str(label)
    }
}

impl FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "cash" | "dinheiro" | "àvista" | "avista" => Ok(PaymentMethod::Cash),
            "financing" | "financiamento" => Ok(PaymentMethod::Financing),
            "creditcard" | "cartãodecrédito" | "cartaodecredito" => Ok(PaymentMethod::CreditCard),
            "tradein" | "troca" => Ok(PaymentMethod::TradeIn),
            _ => Err(invalid_enum_error("payment_method", s)),
        }
    }
}

/// Resultado financiero de una venta: lucro para vehículos propios,
/// comisión para vehículos en consignación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleOutcome {
    Profit(Decimal),
    Commission(Decimal),
}

impl SaleOutcome {
    pub fn profit(&self) -> Option<Decimal> {
        match self {
            SaleOutcome::Profit(amount) => Some(*amount),
            SaleOutcome::Commission(_) => None,
        }
    }

    pub fn commission(&self) -> Option<Decimal> {
        match self {
            SaleOutcome::Commission(amount) => Some(*amount),
            SaleOutcome::Profit(_) => None,
        }
    }
}

/// Datos del comprador, adjuntos al vehículo exactamente cuando se vende
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerInfo {
    pub name: String,
    pub document: String,
    pub payment_method: PaymentMethod,
    pub sale_date: NaiveDate,
    pub sale_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<Decimal>,
}

impl BuyerInfo {
    /// Resultado financiero registrado, si el registro es coherente
    pub fn outcome(&self) -> Option<SaleOutcome> {
        match (self.profit, self.commission) {
            (Some(profit), None) => Some(SaleOutcome::Profit(profit)),
            (None, Some(commission)) => Some(SaleOutcome::Commission(commission)),
            _ => None,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        check_field("buyer.name", validate_not_empty(&self.name))?;
        check_field("buyer.document", validate_not_empty(&self.document))?;
        check_field("buyer.sale_price", validate_non_negative(self.sale_price))?;
        if let Some(commission) = self.commission {
            check_field("buyer.commission", validate_non_negative(commission))?;
        }
        Ok(())
    }
}
