//! Domain services and DTOs

pub mod common;
pub mod employee;
pub mod setting;
pub mod shift;
pub mod shift_model;
pub mod system;
