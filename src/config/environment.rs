//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::services::pricing_service::PricingPolicy;
use crate::utils::validation::validate_phone;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}': {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub pricing: PricingPolicy,
    /// Número de mensajería al que apunta el enlace de contacto
    pub contact_phone: String,
    pub seed_demo_inventory: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            pricing: PricingPolicy::default(),
            contact_phone: "5511999999999".to_string(),
            seed_demo_inventory: true,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Cargar la configuración a partir de una función de búsqueda de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_commission_rate: Decimal =
            parse_or("DEFAULT_COMMISSION_RATE", &lookup, defaults.pricing.default_commission_rate)?;
        let pricing = PricingPolicy::new(default_commission_rate).map_err(|e| {
            ConfigError::InvalidValue {
                name: "DEFAULT_COMMISSION_RATE",
                value: default_commission_rate.to_string(),
                reason: e.to_string(),
            }
        })?;

        let contact_phone = lookup("CONTACT_PHONE").unwrap_or(defaults.contact_phone);
        validate_phone(&contact_phone).map_err(|_| ConfigError::InvalidValue {
            name: "CONTACT_PHONE",
            value: contact_phone.clone(),
            reason: "must contain 10 to 15 digits".to_string(),
        })?;

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_or("PORT", &lookup, defaults.port)?,
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            pricing,
            contact_phone,
            seed_demo_inventory: parse_or("SEED_DEMO_INVENTORY", &lookup, defaults.seed_demo_inventory)?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T, F>(name: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
