// Academic Records Manager - Core Library
// In-memory student/course/registration/grade records with rule enforcement.
// The library owns no presentation; callers report failures and print.

pub mod entities;
pub mod error;
pub mod manager;

// Re-export commonly used types
pub use entities::{
    Course, CourseData, CourseType, Faculty, Grade, GradeValue, Registration, Semester, Student,
    StudentData, StudentStatus,
};
pub use error::{RecordsError, Result};
pub use manager::RecordsManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
