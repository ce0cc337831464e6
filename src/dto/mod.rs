//! DTOs de la API HTTP

pub mod api_response;
pub mod feature_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
