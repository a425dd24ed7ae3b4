use std::path::Path;

use anyhow::{bail, Context};

use crate::models::Subject;

/// Subjects for one semester, grouped from transcript rows.
#[derive(Debug, Clone)]
pub struct SemesterEntry {
    pub semester: u32,
    pub subjects: Vec<Subject>,
}

#[derive(serde::Deserialize)]
struct CsvRow {
    semester: u32,
    marks: f64,
    credit_hours: f64,
}

#[derive(serde::Serialize)]
struct SampleRow {
    semester: u32,
    marks: f64,
    credit_hours: f64,
}

/// Loads a transcript CSV (`semester,marks,credit_hours`) and groups its
/// rows by semester in first-appearance order. Subject order within a
/// semester is row order. Rejects out-of-range marks and non-positive or
/// non-finite credit hours with a row-numbered error.
pub fn load_csv(csv_path: &Path) -> anyhow::Result<Vec<SemesterEntry>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open transcript {}", csv_path.display()))?;

    let mut semesters: Vec<SemesterEntry> = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let line = index + 2; // header is line 1
        let row = result.with_context(|| format!("malformed transcript row at line {line}"))?;

        if !row.marks.is_finite() || !(0.0..=100.0).contains(&row.marks) {
            bail!(
                "invalid marks {} at line {line}: must be between 0 and 100",
                row.marks
            );
        }
        if !row.credit_hours.is_finite() || row.credit_hours <= 0.0 {
            bail!(
                "invalid credit hours {} at line {line}: must be positive",
                row.credit_hours
            );
        }

        let subject = Subject {
            marks: row.marks,
            credit_hours: row.credit_hours,
        };

        match semesters.iter_mut().find(|entry| entry.semester == row.semester) {
            Some(entry) => entry.subjects.push(subject),
            None => semesters.push(SemesterEntry {
                semester: row.semester,
                subjects: vec![subject],
            }),
        }
    }

    Ok(semesters)
}

/// Writes a realistic two-semester sample transcript.
pub fn write_sample(out_path: &Path) -> anyhow::Result<usize> {
    let rows = vec![
        SampleRow { semester: 1, marks: 90.0, credit_hours: 3.0 },
        SampleRow { semester: 1, marks: 72.0, credit_hours: 4.0 },
        SampleRow { semester: 1, marks: 66.0, credit_hours: 3.0 },
        SampleRow { semester: 1, marks: 81.0, credit_hours: 1.5 },
        SampleRow { semester: 2, marks: 58.0, credit_hours: 3.0 },
        SampleRow { semester: 2, marks: 77.0, credit_hours: 3.0 },
        SampleRow { semester: 2, marks: 49.0, credit_hours: 2.0 },
        SampleRow { semester: 2, marks: 85.0, credit_hours: 4.0 },
    ];

    let mut writer = csv::Writer::from_path(out_path)
        .with_context(|| format!("failed to create {}", out_path.display()))?;
    let count = rows.len();
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(count)
}
