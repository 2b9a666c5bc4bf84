use std::collections::BTreeMap;

use crate::error::{RecordsError, RecordsResult};
use crate::rows::{CheckedRow, CourseEntry, SemesterEntry};

/// The courses and semesters result rows may refer to.
///
/// Semester names must be unique because result uploads identify a semester by name only.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: BTreeMap<String, CourseEntry>,
    semesters: BTreeMap<String, SemesterEntry>,
}

impl Catalog {
    pub fn new(courses: Vec<CourseEntry>, semesters: Vec<SemesterEntry>) -> RecordsResult<Self> {
        let mut catalog = Catalog::default();
        for course in courses {
            catalog.add_course(course)?;
        }
        for semester in semesters {
            catalog.add_semester(semester)?;
        }
        Ok(catalog)
    }

    pub fn add_course(&mut self, course: CourseEntry) -> RecordsResult<()> {
        course.check()?;
        if self.courses.contains_key(&course.code) {
            return Err(RecordsError::DuplicateCourse(course.code));
        }
        self.courses.insert(course.code.clone(), course);
        Ok(())
    }

    pub fn add_semester(&mut self, semester: SemesterEntry) -> RecordsResult<()> {
        semester.check()?;
        if self.semesters.contains_key(&semester.name) {
            return Err(RecordsError::DuplicateSemester(semester.name));
        }
        self.semesters.insert(semester.name.clone(), semester);
        Ok(())
    }

    /// Finds a course by code, falling back to an exact name match.
    pub fn course(&self, code_or_name: &str) -> Option<&CourseEntry> {
        self.courses
            .get(code_or_name)
            .or_else(|| self.courses.values().find(|c| c.name == code_or_name))
    }

    pub fn semester(&self, name: &str) -> Option<&SemesterEntry> {
        self.semesters.get(name)
    }

    pub fn courses(&self) -> impl Iterator<Item = &CourseEntry> {
        self.courses.values()
    }
}
