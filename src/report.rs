use std::fmt::Write;

use chrono::NaiveDate;

use crate::gpa;
use crate::models::SemesterSummary;
use crate::transcript::SemesterEntry;

pub fn build_report(semesters: &[SemesterEntry], generated_on: NaiveDate) -> String {
    let summaries: Vec<(u32, SemesterSummary)> = semesters
        .iter()
        .map(|entry| (entry.semester, gpa::compute_semester_gpa(&entry.subjects)))
        .collect();

    let mut output = String::new();

    let _ = writeln!(output, "# GPA & CGPA Report");
    let _ = writeln!(output, "Generated on {generated_on}");
    let _ = writeln!(output);

    if summaries.is_empty() {
        let _ = writeln!(output, "No subjects recorded in this transcript.");
        return output;
    }

    for (semester, summary) in summaries.iter() {
        let _ = writeln!(output, "## Semester {semester}");
        let _ = writeln!(output);
        let _ = writeln!(output, "| Subject | Marks | Credit Hours | Letter | Grade Point |");
        let _ = writeln!(output, "|---|---|---|---|---|");
        for (index, line) in summary.breakdown.iter().enumerate() {
            let _ = writeln!(
                output,
                "| Subject {} | {} | {} | {} | {:.2} |",
                index + 1,
                line.marks,
                line.credit_hours,
                line.letter,
                line.grade_point
            );
        }
        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "GPA: **{:.2}** over {} credit hours",
            summary.gpa, summary.total_credits
        );
        let _ = writeln!(output);
    }

    let sem_summaries: Vec<SemesterSummary> =
        summaries.into_iter().map(|(_, summary)| summary).collect();
    let overall = gpa::compute_cgpa(&sem_summaries);

    let _ = writeln!(output, "## Overall");
    let _ = writeln!(output);
    let _ = writeln!(output, "CGPA: **{:.2}**", overall.cgpa);
    let _ = writeln!(output, "Academic standing: **{}**", overall.standing);

    output
}
