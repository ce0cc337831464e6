//! Utilidades del sistema
//!
//! Manejo de errores, validación de campos y formato de montos.

pub mod errors;
pub mod formatting;
pub mod validation;
