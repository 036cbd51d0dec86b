pub mod shift_api_repository_trait;
pub mod shift_entity;
pub mod shift_fs_adapter;
pub mod shift_repository;
