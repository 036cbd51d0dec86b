//! Storage and infrastructure

pub mod persistence;
