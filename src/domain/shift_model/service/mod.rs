//! Shift template CRUD

pub mod shift_model_service;
