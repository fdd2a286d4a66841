// Demo driver: seeds a sample university, exercises the rules, prints a
// report. All output lives here; the library itself prints nothing.

use anyhow::Result;
use chrono::NaiveDate;

use academic_records::{
    CourseData, CourseType, Faculty, GradeValue, RecordsManager, Semester, StudentData,
    StudentStatus,
};

fn main() -> Result<()> {
    println!("🏛️  Academic Records Manager v{}", academic_records::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut mgr = RecordsManager::new();

    // 1. Course catalog
    println!("\n📚 Seeding course catalog...");
    let algorithms = mgr
        .add_course(CourseData {
            name: "Algorithms".to_string(),
            course_type: CourseType::Mandatory,
            credits: 6,
            semester: Semester::First,
            faculty: Faculty::ComputerScience,
            max_students: 2,
        })
        .id;
    let compilers = mgr
        .add_course(CourseData {
            name: "Compilers".to_string(),
            course_type: CourseType::Special,
            credits: 4,
            semester: Semester::Second,
            faculty: Faculty::ComputerScience,
            max_students: 1,
        })
        .id;
    let analysis = mgr
        .add_course(CourseData {
            name: "Real Analysis".to_string(),
            course_type: CourseType::Mandatory,
            credits: 5,
            semester: Semester::First,
            faculty: Faculty::Mathematics,
            max_students: 30,
        })
        .id;
    println!("✓ {} courses in catalog", mgr.course_count());

    // 2. Enrollment
    println!("\n🎓 Enrolling students...");
    let enrolled_on = NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date");
    let ivan = mgr
        .enroll(StudentData {
            name: "Ivan Petrov".to_string(),
            faculty: Faculty::ComputerScience,
            year: 2,
            status: StudentStatus::Active,
            enrolled_on,
            group: "CS-201".to_string(),
        })
        .id;
    let maria = mgr
        .enroll(StudentData {
            name: "Maria Ivanova".to_string(),
            faculty: Faculty::ComputerScience,
            year: 2,
            status: StudentStatus::Active,
            enrolled_on,
            group: "CS-202".to_string(),
        })
        .id;
    let oleg = mgr
        .enroll(StudentData {
            name: "Oleg Sidorov".to_string(),
            faculty: Faculty::Mathematics,
            year: 1,
            status: StudentStatus::Active,
            enrolled_on,
            group: "MA-101".to_string(),
        })
        .id;
    println!("✓ {} students enrolled", mgr.student_count());

    // 3. Registrations, including calls the rules must reject
    println!("\n🔗 Registering for courses...");
    mgr.register_for_course(ivan, algorithms)?;
    mgr.register_for_course(maria, algorithms)?;
    mgr.register_for_course(ivan, compilers)?;
    mgr.register_for_course(oleg, analysis)?;

    // Compilers holds a single seat
    if let Err(e) = mgr.register_for_course(maria, compilers) {
        println!("✗ rejected: {}", e);
    }
    // A mathematics student cannot take a CS course
    if let Err(e) = mgr.register_for_course(oleg, algorithms) {
        println!("✗ rejected: {}", e);
    }
    println!("✓ {} seats taken in Algorithms", mgr.registration_count(algorithms));

    // 4. Grades
    println!("\n🏅 Recording grades...");
    mgr.set_grade(ivan, algorithms, GradeValue::Excellent)?;
    mgr.set_grade(ivan, compilers, GradeValue::Good)?;
    mgr.set_grade(maria, algorithms, GradeValue::Excellent)?;
    mgr.set_grade(oleg, analysis, GradeValue::Satisfactory)?;

    // Grading an unregistered pair fails
    if let Err(e) = mgr.set_grade(maria, analysis, GradeValue::Good) {
        println!("✗ rejected: {}", e);
    }

    // 5. Status changes
    println!("\n📋 Updating statuses...");
    mgr.update_student_status(oleg, StudentStatus::Expelled)?;
    if let Err(e) = mgr.update_student_status(oleg, StudentStatus::Active) {
        println!("✗ rejected: {}", e);
    }

    // 6. Report
    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Faculty report: {}", Faculty::ComputerScience.as_str());
    for student in mgr.students_by_faculty(Faculty::ComputerScience) {
        println!(
            "   #{} {} ({}, {}) - average {:.2}",
            student.id,
            student.name,
            student.group,
            student.status.as_str(),
            mgr.average_grade(student.id),
        );
    }

    let top = mgr.top_students(Faculty::ComputerScience);
    println!(
        "🏆 Top students: {}",
        top.iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    println!(
        "\n📚 CS courses, first semester: {}",
        mgr.available_courses(Faculty::ComputerScience, Semester::First)
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
