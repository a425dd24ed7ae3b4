use crate::grade;
use crate::models::{OverallResult, SemesterSummary, Subject, SubjectLine};

/// Credit-hour-weighted GPA for one semester, with a per-subject breakdown
/// in submission order. A semester with zero total credit hours has GPA 0.
pub fn compute_semester_gpa(subjects: &[Subject]) -> SemesterSummary {
    let mut quality_points = 0.0;
    let mut total_credits = 0.0;
    let mut breakdown = Vec::with_capacity(subjects.len());

    for subject in subjects {
        let result = grade::convert(subject.marks);
        quality_points += result.grade_point * subject.credit_hours;
        total_credits += subject.credit_hours;
        breakdown.push(SubjectLine {
            marks: subject.marks,
            credit_hours: subject.credit_hours,
            letter: result.letter,
            grade_point: result.grade_point,
        });
    }

    let gpa = if total_credits > 0.0 {
        round2(quality_points / total_credits)
    } else {
        0.0
    };

    SemesterSummary {
        gpa,
        total_credits,
        breakdown,
    }
}

/// Cumulative GPA across semesters, weighting each semester's GPA by its
/// total credit hours. Empty input or zero total credits yields CGPA 0.
pub fn compute_cgpa(semesters: &[SemesterSummary]) -> OverallResult {
    let mut quality_points = 0.0;
    let mut total_credits = 0.0;

    for semester in semesters {
        quality_points += semester.gpa * semester.total_credits;
        total_credits += semester.total_credits;
    }

    let cgpa = if total_credits > 0.0 {
        round2(quality_points / total_credits)
    } else {
        0.0
    };

    OverallResult {
        cgpa,
        standing: grade::standing(cgpa),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LetterGrade, Standing};

    fn subject(marks: f64, credit_hours: f64) -> Subject {
        Subject {
            marks,
            credit_hours,
        }
    }

    #[test]
    fn weighted_semester_gpa_matches_hand_computation() {
        // 90 -> 4.00 over 3 hours, 72 -> 3.00 over 4 hours:
        // (12 + 12) / 7 = 3.4285... -> 3.43
        let summary = compute_semester_gpa(&[subject(90.0, 3.0), subject(72.0, 4.0)]);
        assert_eq!(summary.gpa, 3.43);
        assert_eq!(summary.total_credits, 7.0);
    }

    #[test]
    fn breakdown_preserves_submission_order() {
        let summary = compute_semester_gpa(&[subject(55.0, 3.0), subject(90.0, 2.0)]);
        assert_eq!(summary.breakdown.len(), 2);
        assert_eq!(summary.breakdown[0].letter, LetterGrade::C);
        assert_eq!(summary.breakdown[0].marks, 55.0);
        assert_eq!(summary.breakdown[1].letter, LetterGrade::A);
        assert_eq!(summary.breakdown[1].grade_point, 4.0);
    }

    #[test]
    fn gpa_is_invariant_under_subject_permutation() {
        let forward = compute_semester_gpa(&[
            subject(90.0, 3.0),
            subject(72.0, 4.0),
            subject(61.0, 1.5),
        ]);
        let reversed = compute_semester_gpa(&[
            subject(61.0, 1.5),
            subject(72.0, 4.0),
            subject(90.0, 3.0),
        ]);
        assert_eq!(forward.gpa, reversed.gpa);
        assert_eq!(forward.total_credits, reversed.total_credits);
    }

    #[test]
    fn empty_semester_yields_zero_gpa() {
        let summary = compute_semester_gpa(&[]);
        assert_eq!(summary.gpa, 0.0);
        assert_eq!(summary.total_credits, 0.0);
        assert!(summary.breakdown.is_empty());
    }

    #[test]
    fn single_semester_cgpa_is_that_semesters_gpa() {
        let semester = compute_semester_gpa(&[subject(90.0, 3.0), subject(72.0, 4.0)]);
        let overall = compute_cgpa(std::slice::from_ref(&semester));
        assert_eq!(overall.cgpa, semester.gpa);
    }

    #[test]
    fn cgpa_weights_semesters_by_credits() {
        let semesters = [
            SemesterSummary {
                gpa: 3.43,
                total_credits: 7.0,
                breakdown: Vec::new(),
            },
            SemesterSummary {
                gpa: 2.00,
                total_credits: 5.0,
                breakdown: Vec::new(),
            },
        ];
        // (3.43 * 7 + 2.00 * 5) / 12 = 34.01 / 12 = 2.8341... -> 2.83
        let overall = compute_cgpa(&semesters);
        assert_eq!(overall.cgpa, 2.83);
        assert_eq!(overall.standing, Standing::SecondDivision);
    }

    #[test]
    fn empty_cgpa_input_yields_zero_not_a_panic() {
        let overall = compute_cgpa(&[]);
        assert_eq!(overall.cgpa, 0.0);
        assert_eq!(overall.standing, Standing::Fail);
    }

    #[test]
    fn all_zero_credit_semesters_yield_zero_cgpa() {
        let semesters = [SemesterSummary {
            gpa: 0.0,
            total_credits: 0.0,
            breakdown: Vec::new(),
        }];
        let overall = compute_cgpa(&semesters);
        assert_eq!(overall.cgpa, 0.0);
    }

    #[test]
    fn rounding_is_to_two_decimals() {
        assert_eq!(round2(24.0 / 7.0), 3.43);
        assert_eq!(round2(34.01 / 12.0), 2.83);
        assert_eq!(round2(3.675001), 3.68);
        assert_eq!(round2(3.0), 3.0);
    }
}
