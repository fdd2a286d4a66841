// 🏅 Grade - score awarded for a course
//
// Grades are append-only records: no update or delete exists, so grading
// the same course again produces another record for the same pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::course::Semester;

// ============================================================================
// GRADE VALUE
// ============================================================================

/// The closed grade scale with its integer weights.
///
/// Modeled as a tagged set rather than a bare integer so that out-of-range
/// values can never enter average computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeValue {
    Unsatisfactory,
    Satisfactory,
    Good,
    Excellent,
}

impl GradeValue {
    /// Numeric weight on the 2..=5 scale.
    pub fn points(&self) -> u8 {
        match self {
            GradeValue::Unsatisfactory => 2,
            GradeValue::Satisfactory => 3,
            GradeValue::Good => 4,
            GradeValue::Excellent => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeValue::Unsatisfactory => "Unsatisfactory",
            GradeValue::Satisfactory => "Satisfactory",
            GradeValue::Good => "Good",
            GradeValue::Excellent => "Excellent",
        }
    }
}

// ============================================================================
// GRADE RECORD
// ============================================================================

/// A score awarded to a student for a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub student_id: u32,
    pub course_id: u32,

    pub value: GradeValue,

    /// Timestamp of the grading call
    pub recorded_at: DateTime<Utc>,

    /// Copied from the course at the moment of grading, not supplied by
    /// the caller
    pub semester: Semester,
}

impl Grade {
    pub fn new(
        student_id: u32,
        course_id: u32,
        value: GradeValue,
        semester: Semester,
    ) -> Self {
        Grade {
            student_id,
            course_id,
            value,
            recorded_at: Utc::now(),
            semester,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
