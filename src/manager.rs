// 🗂️ Records Manager - the one owner of all academic state
//
// Owns the four collections (students, courses, registrations, grades)
// and enforces every business rule on mutation. Single-threaded by
// contract: each operation runs to completion, so a rejected call leaves
// no partial state behind.

use crate::entities::{
    Course, CourseData, Faculty, Grade, GradeValue, Registration, Semester, Student, StudentData,
    StudentStatus,
};
use crate::error::{RecordsError, Result};

// ============================================================================
// RECORDS MANAGER
// ============================================================================

pub struct RecordsManager {
    /// Insertion-ordered; ids are assigned from `next_student_id`
    students: Vec<Student>,

    /// Insertion-ordered; ids are assigned from `next_course_id`
    courses: Vec<Course>,

    /// Append-only; duplicates for the same pair are permitted
    registrations: Vec<Registration>,

    /// Append-only; repeated grading of a pair appends another record
    grades: Vec<Grade>,

    next_student_id: u32,
    next_course_id: u32,
}

impl RecordsManager {
    pub fn new() -> Self {
        RecordsManager {
            students: Vec::new(),
            courses: Vec::new(),
            registrations: Vec::new(),
            grades: Vec::new(),
            next_student_id: 1,
            next_course_id: 1,
        }
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Enroll a new student: assigns the next student id and stores the
    /// record. Cannot fail; the input shape carries every field but the id.
    pub fn enroll(&mut self, data: StudentData) -> &Student {
        let id = self.next_student_id;
        self.next_student_id += 1;

        let idx = self.students.len();
        self.students.push(Student::from_data(id, data));
        &self.students[idx]
    }

    /// Add a course to the catalog: assigns the next course id and stores
    /// the record. Cannot fail.
    pub fn add_course(&mut self, data: CourseData) -> &Course {
        let id = self.next_course_id;
        self.next_course_id += 1;

        let idx = self.courses.len();
        self.courses.push(Course::from_data(id, data));
        &self.courses[idx]
    }

    /// Register a student for a course.
    ///
    /// Checks, in order: student exists, course exists, the course still
    /// has capacity, and the faculties match. Any rejection leaves the
    /// registration list untouched.
    pub fn register_for_course(&mut self, student_id: u32, course_id: u32) -> Result<()> {
        let student = self
            .students
            .iter()
            .find(|s| s.id == student_id)
            .ok_or(RecordsError::StudentNotFound(student_id))?;

        let course = self
            .courses
            .iter()
            .find(|c| c.id == course_id)
            .ok_or(RecordsError::CourseNotFound(course_id))?;

        let enrolled = self
            .registrations
            .iter()
            .filter(|r| r.course_id == course_id)
            .count() as u32;
        if enrolled >= course.max_students {
            return Err(RecordsError::CapacityExceeded {
                course_id,
                max_students: course.max_students,
            });
        }

        if student.faculty != course.faculty {
            return Err(RecordsError::FacultyMismatch {
                student: student.faculty,
                course: course.faculty,
            });
        }

        self.registrations.push(Registration::new(student_id, course_id));
        Ok(())
    }

    /// Record a grade for a registered (student, course) pair.
    ///
    /// The stored semester is copied from the course at this moment, and
    /// the record is stamped with the current time. Grades are append-only,
    /// so grading the same course twice yields two records.
    pub fn set_grade(&mut self, student_id: u32, course_id: u32, value: GradeValue) -> Result<()> {
        let registered = self
            .registrations
            .iter()
            .any(|r| r.matches(student_id, course_id));
        if !registered {
            return Err(RecordsError::NotRegistered {
                student_id,
                course_id,
            });
        }

        // A registration implies the course existed at registration time;
        // this only fires if course data was inconsistently removed.
        let course = self
            .courses
            .iter()
            .find(|c| c.id == course_id)
            .ok_or(RecordsError::CourseNotFound(course_id))?;

        let semester = course.semester;
        self.grades
            .push(Grade::new(student_id, course_id, value, semester));
        Ok(())
    }

    /// Overwrite a student's status, enforcing that Expelled is terminal.
    pub fn update_student_status(&mut self, student_id: u32, new_status: StudentStatus) -> Result<()> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == student_id)
            .ok_or(RecordsError::StudentNotFound(student_id))?;

        if !student.status.can_transition_to(new_status) {
            return Err(RecordsError::IllegalTransition {
                from: student.status,
                to: new_status,
            });
        }

        student.status = new_status;
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// All students of a faculty, in enrollment order.
    pub fn students_by_faculty(&self, faculty: Faculty) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.faculty == faculty)
            .collect()
    }

    /// All grade records of a student, in the order they were recorded.
    pub fn student_grades(&self, student_id: u32) -> Vec<&Grade> {
        self.grades
            .iter()
            .filter(|g| g.student_id == student_id)
            .collect()
    }

    /// Courses offered by a faculty in a given semester, in catalog order.
    pub fn available_courses(&self, faculty: Faculty, semester: Semester) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.faculty == faculty && c.semester == semester)
            .collect()
    }

    /// Arithmetic mean of all grade points of a student.
    ///
    /// Returns exactly 0 for a student with no grades; top-student
    /// selection relies on 0 ranking below every earned grade.
    pub fn average_grade(&self, student_id: u32) -> f64 {
        let points: Vec<u8> = self
            .grades
            .iter()
            .filter(|g| g.student_id == student_id)
            .map(|g| g.value.points())
            .collect();

        if points.is_empty() {
            return 0.0;
        }

        points.iter().map(|&p| p as f64).sum::<f64>() / points.len() as f64
    }

    /// Every student of the faculty whose average grade equals the faculty
    /// maximum, provided that maximum is above zero. Ties are all included;
    /// a faculty where nobody has a grade yields an empty result.
    pub fn top_students(&self, faculty: Faculty) -> Vec<&Student> {
        let candidates = self.students_by_faculty(faculty);

        let best = candidates
            .iter()
            .map(|s| self.average_grade(s.id))
            .fold(0.0_f64, f64::max);
        if best <= 0.0 {
            return Vec::new();
        }

        candidates
            .into_iter()
            .filter(|s| self.average_grade(s.id) == best)
            .collect()
    }

    // ========================================================================
    // LOOKUPS & COUNTS
    // ========================================================================

    pub fn student(&self, student_id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == student_id)
    }

    pub fn course(&self, course_id: u32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of registrations held by a course.
    pub fn registration_count(&self, course_id: u32) -> usize {
        self.registrations
            .iter()
            .filter(|r| r.course_id == course_id)
            .count()
    }
}

impl Default for RecordsManager {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
