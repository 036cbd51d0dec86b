//! Shift assignments and the grouped day view

pub mod shift_grouping;
pub mod shift_service;
