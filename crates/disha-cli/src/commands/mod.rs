pub mod auth;
pub mod careers;
pub mod chat;
pub mod colleges;
pub mod config;
pub mod courses;
