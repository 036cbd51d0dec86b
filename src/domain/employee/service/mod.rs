//! Employee CRUD

pub mod employee_service;
