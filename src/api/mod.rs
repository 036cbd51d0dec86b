//! HTTP surface: routes, controllers and DTOs

pub mod controller;
pub mod dto;
pub mod routes;
pub mod util;
