pub mod dashboard_controller;
pub mod feature_controller;
pub mod vehicle_controller;
