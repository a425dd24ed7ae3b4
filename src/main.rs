use std::path::PathBuf;

use anyhow::bail;
use chrono::Utc;
use clap::{Parser, Subcommand};

mod gpa;
mod grade;
mod models;
mod report;
mod transcript;

#[derive(Parser)]
#[command(name = "gpa-estimator")]
#[command(about = "Semester GPA and cumulative CGPA estimator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample transcript CSV
    Sample {
        #[arg(long, default_value = "transcript.csv")]
        out: PathBuf,
    },
    /// Convert a single subject's marks to a letter grade and grade point
    Convert {
        #[arg(long)]
        marks: f64,
    },
    /// Compute semester GPA with a per-subject breakdown
    Gpa {
        #[arg(long)]
        csv: PathBuf,
        /// Restrict to one semester of the transcript
        #[arg(long)]
        semester: Option<u32>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Compute cumulative CGPA and academic standing across all semesters
    Cgpa {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

/// One semester's summary tagged with its semester number for JSON output.
#[derive(serde::Serialize)]
struct SemesterGpa {
    semester: u32,
    #[serde(flatten)]
    summary: models::SemesterSummary,
}

/// Renders all requested semesters as a single JSON array so the output
/// stays parseable as one document.
fn render_gpa_json(summaries: &[SemesterGpa]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sample { out } => {
            let rows = transcript::write_sample(&out)?;
            println!("Wrote {rows} sample subjects to {}.", out.display());
        }
        Commands::Convert { marks } => {
            if !marks.is_finite() || !(0.0..=100.0).contains(&marks) {
                bail!("marks must be between 0 and 100, got {marks}");
            }
            let result = grade::convert(marks);
            println!(
                "Marks {marks} -> grade {} ({:.2} grade points)",
                result.letter, result.grade_point
            );
        }
        Commands::Gpa {
            csv,
            semester,
            json,
        } => {
            let semesters = transcript::load_csv(&csv)?;
            let entries: Vec<_> = match semester {
                Some(wanted) => {
                    let found: Vec<_> = semesters
                        .into_iter()
                        .filter(|entry| entry.semester == wanted)
                        .collect();
                    if found.is_empty() {
                        bail!("semester {wanted} not found in {}", csv.display());
                    }
                    found
                }
                None => semesters,
            };

            if entries.is_empty() {
                println!("No subjects found in {}.", csv.display());
                return Ok(());
            }

            let summaries: Vec<SemesterGpa> = entries
                .iter()
                .map(|entry| SemesterGpa {
                    semester: entry.semester,
                    summary: gpa::compute_semester_gpa(&entry.subjects),
                })
                .collect();

            if json {
                println!("{}", render_gpa_json(&summaries)?);
                return Ok(());
            }

            for SemesterGpa { semester, summary } in summaries {
                println!("Semester {semester}:");
                for (index, line) in summary.breakdown.iter().enumerate() {
                    println!(
                        "- Subject {}: marks {} over {} credit hours -> {} ({:.2})",
                        index + 1,
                        line.marks,
                        line.credit_hours,
                        line.letter,
                        line.grade_point
                    );
                }
                println!(
                    "GPA {:.2} over {} credit hours",
                    summary.gpa, summary.total_credits
                );
            }
        }
        Commands::Cgpa { csv, json } => {
            let semesters = transcript::load_csv(&csv)?;
            if semesters.is_empty() {
                println!("No subjects found in {}.", csv.display());
                return Ok(());
            }

            let summaries: Vec<_> = semesters
                .iter()
                .map(|entry| gpa::compute_semester_gpa(&entry.subjects))
                .collect();
            let overall = gpa::compute_cgpa(&summaries);

            if json {
                println!("{}", serde_json::to_string_pretty(&overall)?);
            } else {
                for (entry, summary) in semesters.iter().zip(summaries.iter()) {
                    println!(
                        "Semester {}: GPA {:.2} over {} credit hours",
                        entry.semester, summary.gpa, summary.total_credits
                    );
                }
                println!("CGPA {:.2} ({})", overall.cgpa, overall.standing);
            }
        }
        Commands::Report { csv, out } => {
            let semesters = transcript::load_csv(&csv)?;
            let report = report::build_report(&semesters, Utc::now().date_naive());
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
