pub mod config_store;
pub mod repository_scanner;
