pub mod catalog;
pub mod enrollment_store;
pub mod session_repository;
pub mod time_service;
pub mod user_repository;
