//! Shared domain helpers

pub mod validation;
