pub mod shift_model_entity;
pub mod shift_model_fs_adapter;
pub mod shift_model_repository;
