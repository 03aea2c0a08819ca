pub mod find_repositories;
pub mod open_repositories;
