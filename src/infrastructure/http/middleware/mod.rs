pub mod auth;
pub mod error;
pub mod permission;

pub use auth::*;
pub use error::*;
pub use permission::*;
