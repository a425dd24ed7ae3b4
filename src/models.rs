use serde::Serialize;

/// One subject as submitted: obtained marks out of 100 and its credit hours.
#[derive(Debug, Clone, Copy)]
pub struct Subject {
    pub marks: f64,
    pub credit_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterGrade {
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "C-")]
    CMinus,
    F,
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::F => "F",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GradeResult {
    pub grade_point: f64,
    pub letter: LetterGrade,
}

/// One row of a semester breakdown, mirroring input order.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectLine {
    pub marks: f64,
    pub credit_hours: f64,
    pub letter: LetterGrade,
    pub grade_point: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SemesterSummary {
    pub gpa: f64,
    pub total_credits: f64,
    pub breakdown: Vec<SubjectLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Standing {
    Fail,
    Pass,
    #[serde(rename = "Second Division")]
    SecondDivision,
    #[serde(rename = "First Division")]
    FirstDivision,
    Distinction,
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Standing::Distinction => "Distinction",
            Standing::FirstDivision => "First Division",
            Standing::SecondDivision => "Second Division",
            Standing::Pass => "Pass",
            Standing::Fail => "Fail",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OverallResult {
    pub cgpa: f64,
    pub standing: Standing,
}
