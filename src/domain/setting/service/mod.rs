//! Account and theme settings

pub mod setting_service;
