// Entity Models
//
// Each record kind lives in its own module:
// - Students and courses have stable ids assigned by the manager
// - Registrations and grades are append-only relations between them

pub mod course;
pub mod grade;
pub mod registration;
pub mod student;

pub use course::{Course, CourseData, CourseType, Semester};
pub use grade::{Grade, GradeValue};
pub use registration::Registration;
pub use student::{Faculty, Student, StudentData, StudentStatus};
