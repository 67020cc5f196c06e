use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Business-rule failures raised by the enrollment core.
///
/// Storage faults are recovered inside the store; only `StorageUnavailable`
/// escapes, and only when neither tier accepted a write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentError {
    #[error("You are already enrolled in this course")]
    AlreadyEnrolled { course_id: String },
    #[error("Course not found: {0}")]
    CourseNotFound(String),
    #[error("You are not enrolled in course {course_id}")]
    NotEnrolled { course_id: String },
    #[error("Module {module_id} does not belong to course {course_id}")]
    ModuleNotFound { course_id: String, module_id: String },
    #[error("Enrollment storage is unavailable, please try again")]
    StorageUnavailable,
}

pub type EnrollmentResult<T> = Result<T, EnrollmentError>;

/// Faults raised by a single storage tier. Never surfaced past the store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored region is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("storage tier is disabled")]
    Disabled,
}
