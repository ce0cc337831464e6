//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la política comercial
//! configurable del inventario.

pub mod environment;

pub use environment::*;
