//! CSV import and the results upload template.
//!
//! Imports never stop at the first bad line. Every row is parsed and validated on its own; rows
//! that fail are reported with their line number in [`ImportReport::errors`] and the rest are
//! returned for loading. Only I/O failures abort an import.

use csv::{ErrorKind, ReaderBuilder, Trim, WriterBuilder};
use log::{info, warn};
use serde::de::DeserializeOwned;
use std::io::{Read, Write};

use crate::error::{RecordsError, RecordsResult};
use crate::rows::{CheckedRow, CourseEntry, RESULTS_TEMPLATE_HEADER, ResultRow, SemesterEntry};

/// A row that was rejected, with the 1-based line it came from (the header is line 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRow<T> {
    pub line: u64,
    pub row: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport<T> {
    pub rows: Vec<ImportedRow<T>>,
    pub errors: Vec<RowError>,
}

impl<T> ImportReport<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_rows(self) -> Vec<T> {
        self.rows.into_iter().map(|r| r.row).collect()
    }
}

fn read_rows<R, T>(reader: R) -> RecordsResult<ImportReport<T>>
where
    R: Read,
    T: DeserializeOwned + CheckedRow,
{
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut report = ImportReport::new();

    for record in rdr.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                if matches!(e.kind(), ErrorKind::Io(_)) {
                    return Err(e.into());
                }
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                warn!("Skipping line {}: {}", line, e);
                report.errors.push(RowError {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let parsed = record
            .deserialize::<T>(Some(&headers))
            .map_err(RecordsError::from)
            .and_then(|row| row.check().map(|_| row));

        match parsed {
            Ok(row) => report.rows.push(ImportedRow { line, row }),
            Err(e) => {
                warn!("Skipping line {}: {}", line, e);
                report.errors.push(RowError {
                    line,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        "Imported {} rows ({} rejected)",
        report.rows.len(),
        report.errors.len()
    );
    Ok(report)
}

/// Reads a results upload with header `reg_number,course,semester,marks`.
pub fn import_results<R: Read>(reader: R) -> RecordsResult<ImportReport<ResultRow>> {
    read_rows(reader)
}

/// Reads a course catalogue with header `code,name,credit_hours`.
pub fn import_courses<R: Read>(reader: R) -> RecordsResult<ImportReport<CourseEntry>> {
    read_rows(reader)
}

/// Reads a semester list with header `name,year`.
pub fn import_semesters<R: Read>(reader: R) -> RecordsResult<ImportReport<SemesterEntry>> {
    read_rows(reader)
}

/// Writes the empty results upload template (header line only).
pub fn write_template<W: Write>(writer: W) -> RecordsResult<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(RESULTS_TEMPLATE_HEADER)?;
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_results_collects_bad_rows() {
        let data = "\
reg_number,course,semester,marks
REG/1,CS101,Semester 1,81
REG/2,CS101,Semester 1,abc
REG/3,CS101,Semester 1,120
,CS101,Semester 1,50
REG/4, CS102 ,Semester 1, 45.5
";
        let report = import_results(data.as_bytes()).unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].line, 2);
        assert_eq!(report.rows[0].row.reg_number, "REG/1");
        assert_eq!(report.rows[1].row.course, "CS102");
        assert_eq!(report.rows[1].row.marks, 45.5);

        let lines: Vec<u64> = report.errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert!(report.errors[1].reason.contains("marks must be between 0 and 100"));
        assert!(report.errors[2].reason.contains("reg_number is required"));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_import_results_wrong_field_count() {
        let data = "reg_number,course,semester,marks\nREG/1,CS101,81\nREG/2,CS101,Semester 1,60\n";
        let report = import_results(data.as_bytes()).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].line, 2);
    }

    #[test]
    fn test_import_empty_input() {
        let report = import_results("".as_bytes()).unwrap();
        assert!(report.rows.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn test_import_courses() {
        let data = "code,name,credit_hours\nCS101,Programming,3\nMA101,Calculus,0\nPH101,Physics,-2\n";
        let report = import_courses(data.as_bytes()).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].reason.contains("credit_hours must be at least 1"));
        assert_eq!(report.errors[1].line, 4);
        assert!(report.errors[1].reason.contains("credit_hours must be at least 1"));
        let courses = report.into_rows();
        assert_eq!(courses[0].credit_hours, 3);
    }

    #[test]
    fn test_import_semesters() {
        let data = "name,year\nSemester 1,2023\nSemester 2,twenty\n";
        let report = import_semesters(data.as_bytes()).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].row.year, 2023);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_write_template() {
        let mut out = Vec::new();
        write_template(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "reg_number,course,semester,marks\n");
    }
}
