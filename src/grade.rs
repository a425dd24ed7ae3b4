use crate::models::{GradeResult, LetterGrade, Standing};

/// Maps obtained marks to a grade point and letter grade on the official
/// scale. Total over the reals: anything below 50 lands on F, anything at or
/// above 85 on A. Range enforcement belongs to the caller.
pub fn convert(marks: f64) -> GradeResult {
    let (grade_point, letter) = if marks >= 85.0 {
        (4.00, LetterGrade::A)
    } else if marks >= 80.0 {
        (3.67, LetterGrade::AMinus)
    } else if marks >= 75.0 {
        (3.33, LetterGrade::BPlus)
    } else if marks >= 70.0 {
        (3.00, LetterGrade::B)
    } else if marks >= 65.0 {
        (2.67, LetterGrade::BMinus)
    } else if marks >= 60.0 {
        (2.33, LetterGrade::CPlus)
    } else if marks >= 55.0 {
        (2.00, LetterGrade::C)
    } else if marks >= 50.0 {
        (1.67, LetterGrade::CMinus)
    } else {
        (0.00, LetterGrade::F)
    };
    GradeResult { grade_point, letter }
}

/// Academic standing for a cumulative GPA.
pub fn standing(cgpa: f64) -> Standing {
    if cgpa >= 3.5 {
        Standing::Distinction
    } else if cgpa >= 3.0 {
        Standing::FirstDivision
    } else if cgpa >= 2.5 {
        Standing::SecondDivision
    } else if cgpa >= 2.0 {
        Standing::Pass
    } else {
        Standing::Fail
    }
}
