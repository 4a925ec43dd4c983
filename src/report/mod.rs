//! Job reporting for finetune-prep.
//!
//! Formats fine-tuning job metadata for the console: a multi-line summary of
//! one job, a terse header/row pair, and a summary table with duration and
//! token throughput. The sampling code does not depend on this module.
//!
//! A job that has not finished is measured up to `now`. Jobs with no reported
//! token count are treated as having trained zero tokens. Throughput is left
//! undefined (`None`, rendered as `-`) when no time has elapsed.

pub mod job;

pub use job::{JobInfo, JobRecord, JobStatus};

use crate::core::constants::{JOB_ID_COLUMN_WIDTH, SECONDS_PER_MINUTE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// One row of the job summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    /// Job identifier
    pub id: String,
    /// Current status
    pub status: JobStatus,
    /// Training file reference
    pub training_file: String,
    /// Resulting model name
    pub model: Option<String>,
    /// Elapsed minutes
    pub duration_minutes: f64,
    /// Trained tokens, zero when not reported
    pub trained_tokens: u64,
    /// Throughput, `None` when no time has elapsed
    pub tokens_per_minute: Option<f64>,
}

impl JobSummary {
    /// Summarize one job as of `now`
    pub fn from_job<J: JobInfo + ?Sized>(job: &J, now: DateTime<Utc>) -> Self {
        let elapsed_seconds = job.elapsed(now).num_milliseconds() as f64 / 1000.0;
        let duration_minutes = elapsed_seconds / SECONDS_PER_MINUTE;
        let trained_tokens = job.trained_tokens().unwrap_or(0);

        JobSummary {
            id: job.id().to_string(),
            status: job.status(),
            training_file: job.training_file().to_string(),
            model: job.model_name().map(str::to_string),
            duration_minutes,
            trained_tokens,
            tokens_per_minute: tokens_per_minute(trained_tokens, duration_minutes),
        }
    }
}

/// Token throughput, `None` for zero or negative durations.
pub fn tokens_per_minute(trained_tokens: u64, duration_minutes: f64) -> Option<f64> {
    if duration_minutes > 0.0 {
        Some(trained_tokens as f64 / duration_minutes)
    } else {
        None
    }
}

fn display_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "-".to_string(), |r| format!("{:.2}", r))
}

/// Multi-line text summary of a single job.
pub fn format_job_summary<J: JobInfo + ?Sized>(job: &J, now: DateTime<Utc>) -> String {
    let summary = JobSummary::from_job(job, now);
    let finished = match job.finished_at() {
        Some(t) => t.format(TIMESTAMP_FORMAT).to_string(),
        None => "still running".to_string(),
    };

    [
        format!("Job ID: {}", summary.id),
        format!("Status: {}", summary.status),
        format!("Training file: {}", summary.training_file),
        format!("Model: {}", summary.model.as_deref().unwrap_or("-")),
        format!("Created: {}", job.created_at().format(TIMESTAMP_FORMAT)),
        format!("Finished: {}", finished),
        format!("Duration: {:.2} min", summary.duration_minutes),
        format!("Trained tokens: {}", summary.trained_tokens),
        format!("Tokens/min: {}", display_rate(summary.tokens_per_minute)),
    ]
    .join("\n")
}

/// [`format_job_summary`] measured against the current time
pub fn format_job_summary_now<J: JobInfo + ?Sized>(job: &J) -> String {
    format_job_summary(job, Utc::now())
}

/// Header line of the terse job table.
pub fn table_header() -> String {
    format!(
        "{:<width$} {:<16} {}",
        "JOB ID",
        "STATUS",
        "MODEL",
        width = JOB_ID_COLUMN_WIDTH
    )
}

/// One terse row: identifier, status and model name.
pub fn table_row<J: JobInfo + ?Sized>(job: &J) -> String {
    format!(
        "{:<width$} {:<16} {}",
        job.id(),
        job.status().as_str(),
        job.model_name().unwrap_or("-"),
        width = JOB_ID_COLUMN_WIDTH
    )
}

/// Summary rows for a sequence of jobs, in input order.
pub fn summarize_jobs<J: JobInfo>(jobs: &[J], now: DateTime<Utc>) -> Vec<JobSummary> {
    jobs.iter().map(|job| JobSummary::from_job(job, now)).collect()
}

/// [`summarize_jobs`] measured against the current time
pub fn summarize_jobs_now<J: JobInfo>(jobs: &[J]) -> Vec<JobSummary> {
    summarize_jobs(jobs, Utc::now())
}

/// Render summary rows as an aligned text table.
pub fn render_summary_table(rows: &[JobSummary]) -> String {
    let mut out = String::new();
    let header = format!(
        "{:<width$} {:<16} {:<24} {:>10} {:>12} {:>12}",
        "JOB ID",
        "STATUS",
        "TRAINING FILE",
        "MINUTES",
        "TOKENS",
        "TOKENS/MIN",
        width = JOB_ID_COLUMN_WIDTH
    );
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:<width$} {:<16} {:<24} {:>10.2} {:>12} {:>12}",
            row.id,
            row.status.as_str(),
            row.training_file,
            row.duration_minutes,
            row.trained_tokens,
            display_rate(row.tokens_per_minute),
            width = JOB_ID_COLUMN_WIDTH
        ));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn job(id: &str, finished: Option<i64>, tokens: Option<u64>) -> JobRecord {
        JobRecord {
            id: id.to_string(),
            created_at: at(1_000),
            finished_at: finished.map(at),
            status: if finished.is_some() {
                JobStatus::Succeeded
            } else {
                JobStatus::Running
            },
            trained_tokens: tokens,
            training_file: "file-train".to_string(),
            fine_tuned_model: finished.map(|_| format!("ft:{}", id)),
        }
    }

    #[test]
    fn test_summary_finished_job() {
        let summary = JobSummary::from_job(&job("a", Some(1_000 + 600), Some(5_000)), at(99_999));
        assert_relative_eq!(summary.duration_minutes, 10.0);
        assert_eq!(summary.trained_tokens, 5_000);
        assert_relative_eq!(summary.tokens_per_minute.unwrap(), 500.0);
        assert_eq!(summary.model.as_deref(), Some("ft:a"));
    }

    #[test]
    fn test_summary_running_job_uses_now() {
        let summary = JobSummary::from_job(&job("b", None, None), at(1_000 + 90));
        assert_relative_eq!(summary.duration_minutes, 1.5);
        assert_eq!(summary.trained_tokens, 0);
        assert_relative_eq!(summary.tokens_per_minute.unwrap(), 0.0);
    }

    #[test]
    fn test_zero_duration_has_no_rate() {
        let summary = JobSummary::from_job(&job("c", Some(1_000), Some(10)), at(5_000));
        assert_eq!(summary.duration_minutes, 0.0);
        assert_eq!(summary.tokens_per_minute, None);
        assert_eq!(tokens_per_minute(10, -1.0), None);
    }

    #[test]
    fn test_format_job_summary() {
        let text = format_job_summary(&job("ftjob-1", Some(1_000 + 120), Some(300)), at(0));
        assert!(text.contains("Job ID: ftjob-1"));
        assert!(text.contains("Status: succeeded"));
        assert!(text.contains("Duration: 2.00 min"));
        assert!(text.contains("Tokens/min: 150.00"));
        assert!(text.contains("Created: 1970-01-01 00:16:40 UTC"));

        let running = format_job_summary(&job("ftjob-2", None, None), at(1_000));
        assert!(running.contains("Finished: still running"));
        assert!(running.contains("Model: -"));
        assert!(running.contains("Tokens/min: -"));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Job ID: ftjob-1");
        assert_eq!(lines[8], "Tokens/min: 150.00");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_terse_table() {
        let header = table_header();
        let row = table_row(&job("ftjob-1", Some(2_000), None));
        assert!(header.starts_with("JOB ID"));
        assert!(row.starts_with("ftjob-1"));
        assert!(row.contains("succeeded"));
        assert!(row.ends_with("ft:ftjob-1"));
        // Status column starts at the same offset in header and row
        assert_eq!(header.find("STATUS"), row.find("succeeded"));
    }

    #[test]
    fn test_render_summary_table() {
        let jobs = vec![
            job("a", Some(1_060), Some(120)),
            job("b", None, None),
        ];
        let rows = summarize_jobs(&jobs, at(1_000));
        assert_eq!(rows.len(), 2);

        let table = render_summary_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("TOKENS/MIN"));
        assert!(lines[2].starts_with("a "));
        assert!(lines[2].trim_end().ends_with("120.00"));
        assert!(lines[3].trim_end().ends_with('-'));
        assert_eq!(lines[1].len(), lines[0].len());
        assert!(table.ends_with('\n'));
    }
}
