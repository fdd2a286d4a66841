// Failure taxonomy for the records manager
//
// Every failure is raised synchronously at the offending call and leaves
// the manager's state untouched; none is fatal to the manager itself.

use thiserror::Error;

use crate::entities::{Faculty, StudentStatus};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordsError {
    #[error("student {0} not found")]
    StudentNotFound(u32),

    #[error("course {0} not found")]
    CourseNotFound(u32),

    /// The course already holds `max_students` registrations.
    #[error("course {course_id} is full ({max_students} students)")]
    CapacityExceeded { course_id: u32, max_students: u32 },

    /// The student's faculty differs from the course's faculty.
    #[error("student faculty {student:?} does not match course faculty {course:?}")]
    FacultyMismatch { student: Faculty, course: Faculty },

    /// No registration exists for the (student, course) pair.
    #[error("student {student_id} is not registered for course {course_id}")]
    NotRegistered { student_id: u32, course_id: u32 },

    /// Attempted to move a student out of a terminal status.
    #[error("illegal status transition {from:?} -> {to:?}")]
    IllegalTransition {
        from: StudentStatus,
        to: StudentStatus,
    },
}

pub type Result<T> = std::result::Result<T, RecordsError>;
