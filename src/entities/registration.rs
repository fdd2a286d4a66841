// 🔗 Registration - student/course enrollment relation
//
// Append-only: registrations are created by the register operation and
// never removed. A registration is the prerequisite for grading.

use serde::{Deserialize, Serialize};

/// Relation asserting a student is enrolled in a course.
///
/// Duplicate pairs are allowed by contract: registering the same student
/// for the same course twice simply appends a second relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub student_id: u32,
    pub course_id: u32,
}

impl Registration {
    pub fn new(student_id: u32, course_id: u32) -> Self {
        Registration {
            student_id,
            course_id,
        }
    }

    /// Check whether this relation is for exactly the given pair.
    pub fn matches(&self, student_id: u32, course_id: u32) -> bool {
        self.student_id == student_id && self.course_id == course_id
    }
}
