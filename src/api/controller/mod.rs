//! Controllers: connect routes to domain services

pub mod employee;
pub mod setting;
pub mod shift;
pub mod shift_model;
pub mod system;
