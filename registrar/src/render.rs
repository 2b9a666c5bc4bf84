//! Plain-text transcript, for printing or pasting into a letter.

use grading::scorer::format_gpa;
use grading::{GradeOutcome, Standing, Transcript};

fn row_line(
    code: &str,
    name: &str,
    marks: &str,
    grade: &str,
    points: &str,
    credits: &str,
    status: &str,
) -> String {
    format!("{code:<10}{name:<28}{marks:>6}  {grade:<6}{points:>6}  {credits:>7}  {status}\n")
}

pub fn render_transcript(transcript: &Transcript) -> String {
    let mut out = format!("Transcript: {}\n", transcript.student_id);

    for semester in &transcript.semesters {
        out.push_str(&format!("\n{}\n", semester.semester));
        out.push_str(&row_line(
            "Code", "Course", "Marks", "Grade", "Points", "Credits", "Status",
        ));
        for row in &semester.rows {
            out.push_str(&row_line(
                &row.course_code,
                &row.course_name,
                &format!("{:.1}", row.marks),
                row.grade.as_str(),
                &GradeOutcome::from(row.grade).points_label(),
                &row.credit_hours.to_string(),
                row.status.label(),
            ));
        }
        let summary = &semester.summary;
        out.push_str(&format!(
            "GPA {} ({}). {}\n",
            format_gpa(summary.gpa),
            summary.classification.label(),
            summary.message.text()
        ));
    }

    let standing = if transcript.standing.withdrawn {
        Standing::Withdrawn
    } else {
        Standing::Active
    };
    out.push_str(&format!("\nCGPA: {}\n", format_gpa(transcript.cgpa)));
    out.push_str(&format!(
        "Cumulative GPA (credit weighted): {}\n",
        format_gpa(transcript.credit_weighted_gpa)
    ));
    out.push_str(&format!("Total credits: {}\n", transcript.total_credits));
    out.push_str(&format!(
        "Classification: {}\n",
        transcript.standing.classification.label()
    ));
    out.push_str(&format!("Standing: {standing}\n"));
    out
}
