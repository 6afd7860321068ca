pub mod manager;
pub mod memory;
pub mod models;
pub mod repository;
