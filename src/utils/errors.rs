//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del inventario
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request: {0}")]
    RequestValidation(#[from] validator::ValidationErrors),

    #[error("Invalid value '{value}' for {field}")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid sale state: {0}")]
    InvalidSaleState(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl AppError {
    /// Código estable que el front-end usa para elegir el mensaje a mostrar
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::RequestValidation(_) => "VALIDATION_ERROR",
            AppError::InvalidEnumValue { .. } => "INVALID_ENUM_VALUE",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidSaleState(_) => "INVALID_SALE_STATE",
            AppError::BadRequest(_) => "BAD_REQUEST",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidSaleState(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();

        let (error, details) = match &self {
            AppError::Validation(_) => ("Validation Error", None),
            AppError::RequestValidation(e) => ("Validation Error", Some(json!(e))),
            AppError::InvalidEnumValue { field, value } => (
                "Invalid Enum Value",
                Some(json!({ "field": field, "value": value })),
            ),
            AppError::NotFound(_) => ("Not Found", None),
            AppError::InvalidSaleState(_) => ("Invalid Sale State", None),
            AppError::BadRequest(_) => ("Bad Request", None),
        };

        tracing::warn!("⚠️ {} ({}): {}", error, code, self);

        let body = ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
            details,
            code,
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &str, message: &str) -> AppError {
    AppError::Validation(format!("{}: {}", field, message))
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de estado de venta
pub fn invalid_sale_state_error(vehicle_id: u64, reason: &str) -> AppError {
    AppError::InvalidSaleState(format!("vehicle {}: {}", vehicle_id, reason))
}

/// Función helper para crear errores de valor enumerado desconocido
pub fn invalid_enum_error(field: &'static str, value: &str) -> AppError {
    AppError::InvalidEnumValue {
        field,
        value: value.to_string(),
    }
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
