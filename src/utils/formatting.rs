//! Formateo de valores monetarios para mensajes al cliente

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formatea un valor en reales: `R$ 485.000`, `R$ 1.234,50`, `-R$ 50.000`
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    let integer = rounded.trunc();
    let cents = ((rounded - integer) * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or(0);

    let digits = integer.to_u128().unwrap_or(0).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    if cents == 0 {
        format!("{}R$ {}", sign, grouped)
    } else {
        format!("{}R$ {},{:02}", sign, grouped, cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_amounts() {
        assert_eq!(format_brl(Decimal::from(485_000)), "R$ 485.000");
        assert_eq!(format_brl(Decimal::from(1_200_000)), "R$ 1.200.000");
        assert_eq!(format_brl(Decimal::from(950)), "R$ 950");
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0");
    }

    #[test]
    fn test_format_cents_and_negatives() {
        assert_eq!(format_brl(Decimal::new(123450, 2)), "R$ 1.234,50");
        assert_eq!(format_brl(Decimal::new(1005, 3)), "R$ 1,01");
        assert_eq!(format_brl(Decimal::from(-50_000)), "-R$ 50.000");
    }
}
