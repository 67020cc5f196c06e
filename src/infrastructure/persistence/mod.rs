pub mod catalog;
pub mod sessions;
pub mod users;

pub use catalog::StaticCatalog;
pub use sessions::InMemorySessionRepository;
pub use users::InMemoryUserRepository;
