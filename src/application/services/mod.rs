pub mod auth_service;
pub mod catalog_service;
pub mod checkout_service;
pub mod enrollment_service;

pub use auth_service::{AuthResult, AuthService};
pub use catalog_service::CatalogService;
pub use checkout_service::{CheckoutReceipt, CheckoutService};
pub use enrollment_service::EnrollmentService;
