//! File-backed persistence for employees, shifts, shift models and settings

pub mod collection_fs_adapter_trait;
pub mod employee;
pub mod fixed_fs_adapter_trait;
pub mod logs;
pub mod row_file_fs_adapter;
pub mod setting;
pub mod shift;
pub mod shift_model;
pub mod storage_path;

#[cfg(test)]
pub mod memory;
