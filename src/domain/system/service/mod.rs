//! Status, health and log access

pub mod log_service;
pub mod status_service;
