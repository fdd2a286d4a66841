// 🎓 Student Entity - identity, standing, and status rules
//
// A student's id is IDENTITY (assigned once by the manager, never changes);
// status is the only value any exposed operation mutates afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// FACULTY
// ============================================================================

/// Organizational unit a student belongs to and a course is offered under.
///
/// Registration requires the student's and the course's faculty to be equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faculty {
    ComputerScience,
    Mathematics,
    Physics,
    Economics,
}

impl Faculty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Faculty::ComputerScience => "Computer Science",
            Faculty::Mathematics => "Mathematics",
            Faculty::Physics => "Physics",
            Faculty::Economics => "Economics",
        }
    }
}

// ============================================================================
// STUDENT STATUS
// ============================================================================

/// A student's standing. Expelled is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentStatus {
    Active,
    AcademicLeave,
    Graduated,
    Expelled,
}

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "Active",
            StudentStatus::AcademicLeave => "Academic Leave",
            StudentStatus::Graduated => "Graduated",
            StudentStatus::Expelled => "Expelled",
        }
    }

    /// Whether a transition from `self` to `new_status` is legal.
    ///
    /// Expelled is terminal: once expelled, only Expelled itself is
    /// accepted. Every other pair transitions freely, including
    /// Graduated back to Active.
    pub fn can_transition_to(&self, new_status: StudentStatus) -> bool {
        match self {
            StudentStatus::Expelled => new_status == StudentStatus::Expelled,
            _ => true,
        }
    }
}

// ============================================================================
// STUDENT ENTITY
// ============================================================================

/// Student record owned by the records manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Stable identity - assigned by the manager, NEVER changes
    pub id: u32,

    /// Full name
    pub name: String,

    /// Faculty affiliation
    pub faculty: Faculty,

    /// Academic year (1-based)
    pub year: u8,

    /// Current standing; mutated only via the status-update operation
    pub status: StudentStatus,

    /// Date of enrollment
    pub enrolled_on: NaiveDate,

    /// Study group identifier (e.g. "CS-101")
    pub group: String,
}

/// All student fields except identity; input shape for the enroll operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentData {
    pub name: String,
    pub faculty: Faculty,
    pub year: u8,
    pub status: StudentStatus,
    pub enrolled_on: NaiveDate,
    pub group: String,
}

impl Student {
    /// Materialize a student record from its input shape and assigned id.
    pub fn from_data(id: u32, data: StudentData) -> Self {
        Student {
            id,
            name: data.name,
            faculty: data.faculty,
            year: data.year,
            status: data.status,
            enrolled_on: data.enrolled_on,
            group: data.group,
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
    fn test_expelled_is_terminal() {
        let expelled = StudentStatus::Expelled;

        assert!(!expelled.can_transition_to(StudentStatus::Active));
        assert!(!expelled.can_transition_to(StudentStatus::AcademicLeave));
        assert!(!expelled.can_transition_to(StudentStatus::Graduated));

        // Expelled -> Expelled is a no-op, not an illegal transition
        assert!(expelled.can_transition_to(StudentStatus::Expelled));
    }

    #[test]
    fn test_non_terminal_statuses_transition_freely() {
        let free = [
            StudentStatus::Active,
            StudentStatus::AcademicLeave,
            StudentStatus::Graduated,
        ];

        for from in free {
            for to in [
                StudentStatus::Active,
                StudentStatus::AcademicLeave,
                StudentStatus::Graduated,
                StudentStatus::Expelled,
            ] {
                assert!(from.can_transition_to(to), "{:?} -> {:?}", from, to);
            }
        }
    }

    #[test]
    fn test_student_from_data_keeps_fields() {
        let data = StudentData {
            name: "Alice Moreau".to_string(),
            faculty: Faculty::Physics,
            year: 2,
            status: StudentStatus::Active,
            enrolled_on: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            group: "PH-201".to_string(),
        };

        let student = Student::from_data(7, data);

        assert_eq!(student.id, 7);
        assert_eq!(student.name, "Alice Moreau");
        assert_eq!(student.faculty, Faculty::Physics);
        assert_eq!(student.year, 2);
        assert_eq!(student.status, StudentStatus::Active);
        assert_eq!(student.group, "PH-201");
    }
}
