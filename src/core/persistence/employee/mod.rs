pub mod employee_entity;
pub mod employee_fs_adapter;
pub mod employee_repository;
