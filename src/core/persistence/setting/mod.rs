pub mod setting_api_repository_trait;
pub mod setting_entity;
pub mod setting_fs_adapter;
pub mod setting_repository;
pub mod theme;
