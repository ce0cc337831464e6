//! Enlace de contacto con el vendedor
//!
//! Sólo construye la URL de mensajería; no realiza ninguna llamada de red.

use crate::models::Vehicle;
use crate::services::pricing_service::quoted_price;
use crate::utils::formatting::format_brl;

const MESSAGING_BASE_URL: &str = "https://wa.me";

/// Mensaje de interés con nombre, id, precio cotizado y adicionales elegidos
pub fn contact_message(vehicle: &Vehicle) -> String {
    let mut message = format!(
        "Hello! I'm interested in the vehicle {} (ID: {}) priced at {}.",
        vehicle.name,
        vehicle.id,
        format_brl(quoted_price(vehicle))
    );

    let selected: Vec<&str> = vehicle.selected_features().map(|f| f.name.as_str()).collect();
    if !selected.is_empty() {
        message.push_str("\nSelected add-ons: ");
        message.push_str(&selected.join(", "));
    }
    message
}

pub fn contact_link(vehicle: &Vehicle, phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!(
        "{}/{}?text={}",
        MESSAGING_BASE_URL,
        digits,
        urlencoding::encode(&contact_message(vehicle))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::seed::demo_vehicles;

    #[test]
    fn test_message_without_add_ons() {
        let vehicles = demo_vehicles();
        let porsche = &vehicles[3];
        assert_eq!(
            contact_message(porsche),
            "Hello! I'm interested in the vehicle Porsche 911 Turbo S (ID: 4) priced at R$ 1.200.000."
        );
    }

    #[test]
    fn test_message_lists_selected_add_ons_and_quoted_price() {
        let mut bmw = demo_vehicles().remove(0);
        bmw.feature_mut(1).unwrap().selected = true;
        bmw.feature_mut(3).unwrap().selected = true;

        let message = contact_message(&bmw);
        assert!(message.contains("priced at R$ 502.000."));
        assert!(message.ends_with("Selected add-ons: Teto Solar Panorâmico, Assistente de Estacionamento"));
    }

    #[test]
    fn test_link_is_percent_encoded() {
        let vehicles = demo_vehicles();
        let link = contact_link(&vehicles[4], "+55 (11) 99999-9999");
        assert!(link.starts_with("https://wa.me/5511999999999?text=Hello%21%20I%27m"));
        assert!(!link.contains(' '));
        assert!(link.contains("Tesla%20Model%20S"));
    }
}
