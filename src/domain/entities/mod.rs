pub mod app_config;
pub mod group;
pub mod repository;
