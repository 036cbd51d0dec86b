//! API route declarations (e.g., /api/v1/*)

pub mod employee_routes;
pub mod setting_routes;
pub mod shift_model_routes;
pub mod shift_routes;
pub mod system_routes;
