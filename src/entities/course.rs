// 📚 Course Entity - catalog entry with enrollment capacity
//
// Courses are created once by the add-course operation and never mutated
// or deleted afterwards; the id is IDENTITY assigned by the manager.

use serde::{Deserialize, Serialize};

use super::student::Faculty;

// ============================================================================
// COURSE TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseType {
    /// Required for the degree program
    Mandatory,

    /// Elective chosen by the student
    Optional,

    /// Special topics / seminar
    Special,
}

impl CourseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Mandatory => "Mandatory",
            CourseType::Optional => "Optional",
            CourseType::Special => "Special",
        }
    }
}

// ============================================================================
// SEMESTER
// ============================================================================

/// One of the two yearly terms. Copied onto a grade from its course at
/// grading time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::First => "First",
            Semester::Second => "Second",
        }
    }
}

// ============================================================================
// COURSE ENTITY
// ============================================================================

/// Course record owned by the records manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Stable identity - assigned by the manager, NEVER changes
    pub id: u32,

    /// Course name
    pub name: String,

    pub course_type: CourseType,

    /// Credit count awarded on completion
    pub credits: u8,

    /// Term the course runs in
    pub semester: Semester,

    /// Faculty offering the course; registration requires equality with
    /// the student's faculty
    pub faculty: Faculty,

    /// Maximum number of registrations accepted
    pub max_students: u32,
}

/// All course fields except identity; input shape for the add-course
/// operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseData {
    pub name: String,
    pub course_type: CourseType,
    pub credits: u8,
    pub semester: Semester,
    pub faculty: Faculty,
    pub max_students: u32,
}

impl Course {
    pub fn from_data(id: u32, data: CourseData) -> Self {
        Course {
            id,
            name: data.name,
            course_type: data.course_type,
            credits: data.credits,
            semester: data.semester,
            faculty: data.faculty,
            max_students: data.max_students,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_from_data_keeps_fields() {
        let data = CourseData {
            name: "Algorithms".to_string(),
            course_type: CourseType::Mandatory,
            credits: 6,
            semester: Semester::First,
            faculty: Faculty::ComputerScience,
            max_students: 30,
        };

        let course = Course::from_data(3, data);

        assert_eq!(course.id, 3);
        assert_eq!(course.name, "Algorithms");
        assert_eq!(course.course_type, CourseType::Mandatory);
        assert_eq!(course.credits, 6);
        assert_eq!(course.semester, Semester::First);
        assert_eq!(course.faculty, Faculty::ComputerScience);
        assert_eq!(course.max_students, 30);
    }

    #[test]
    fn test_enum_labels() {
        assert_eq!(CourseType::Special.as_str(), "Special");
        assert_eq!(Semester::Second.as_str(), "Second");
        assert_eq!(Faculty::ComputerScience.as_str(), "Computer Science");
    }
}
