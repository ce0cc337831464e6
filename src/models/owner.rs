//! Propietario de un vehículo en consignación

use serde::{Deserialize, Serialize};

use crate::utils::errors::AppResult;
use crate::utils::validation::{check_field, validate_email, validate_not_empty, validate_phone};

/// Datos del tercero dueño de un vehículo en consignación
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerInfo {
    pub name: String,
    pub document: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl OwnerInfo {
    pub fn validate(&self) -> AppResult<()> {
        check_field("owner.name", validate_not_empty(&self.name))?;
        check_field("owner.document", validate_not_empty(&self.document))?;
        check_field("owner.phone", validate_phone(&self.phone))?;
        if let Some(email) = &self.email {
            check_field("owner.email", validate_email(email))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> OwnerInfo {
        OwnerInfo {
            name: "Carla Mendes".to_string(),
            document: "123.456.789-00".to_string(),
            phone: "(11) 98888-7777".to_string(),
            email: Some("carla@example.com".to_string()),
            address: None,
        }
    }

    #[test]
    fn test_valid_owner() {
        assert!(owner().validate().is_ok());
    }

    #[test]
    fn test_owner_rejects_bad_contact_data() {
        let mut bad_phone = owner();
        bad_phone.phone = "123".to_string();
        assert!(bad_phone.validate().is_err());

        let mut bad_email = owner();
        bad_email.email = Some("not-an-email".to_string());
        assert!(bad_email.validate().is_err());

        let mut no_document = owner();
        no_document.document = " ".to_string();
        assert!(no_document.validate().is_err());
    }
}
