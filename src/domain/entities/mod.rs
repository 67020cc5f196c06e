pub mod course;
pub mod enrollment;
pub mod session;
pub mod user;

pub use course::*;
pub use enrollment::*;
pub use session::*;
pub use user::*;
