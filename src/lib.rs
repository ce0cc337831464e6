//! Inventario y ventas de una concesionaria
//!
//! Modelo de vehículos, adicionales, compradores y consignantes; cálculo
//! de precios y resultado de venta; repositorio en memoria y la API HTTP
//! que lo expone.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
