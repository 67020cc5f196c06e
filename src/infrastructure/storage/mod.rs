pub mod in_memory_tier;
pub mod json_file_tier;
pub mod tiered_store;

pub use in_memory_tier::{demo_enrollments, InMemoryTier};
pub use json_file_tier::JsonFileTier;
pub use tiered_store::TieredEnrollmentStore;
