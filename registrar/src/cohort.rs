use grading::Transcript;
use grading::cohort::{
    ClassificationDistribution, CourseMark, CourseStats, StudentGpa, at_risk, course_performance,
    top_students,
};
use records::{RecordsResult, ResultStore};
use serde::Serialize;

/// Staff dashboard figures for every student in a store.
///
/// A student's GPA here is the credit-weighted GPA over every result they have, so a heavy
/// failing semester weighs more than a light passing one.
#[derive(Debug, Serialize)]
pub struct CohortReport {
    pub students: usize,
    pub top_students: Vec<StudentGpa>,
    pub at_risk: Vec<StudentGpa>,
    pub distribution: ClassificationDistribution,
    pub courses: Vec<CourseStats>,
}

impl CohortReport {
    pub fn build<S: ResultStore>(store: &S, top_n: usize, at_risk_gpa: f64) -> RecordsResult<Self> {
        let mut gpas = Vec::new();
        let mut marks = Vec::new();

        for student in store.students() {
            let records = store.transcript_records(&student)?;
            let transcript = Transcript::build(student.as_str(), &records)?;
            marks.extend(records.into_iter().map(|r| CourseMark {
                course_code: r.course_code,
                mark: r.result.mark,
            }));
            gpas.push(StudentGpa::new(student, transcript.credit_weighted_gpa));
        }

        Ok(CohortReport {
            students: gpas.len(),
            top_students: top_students(&gpas, top_n),
            at_risk: at_risk(&gpas, at_risk_gpa),
            distribution: ClassificationDistribution::from_gpas(&gpas),
            courses: course_performance(&store.course_codes(), &marks),
        })
    }
}
