//! Fine-tuning job records.

use crate::core::error::{PrepError, Result};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a fine-tuning job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Training files are being validated
    ValidatingFiles,
    /// Waiting for capacity
    Queued,
    /// Training in progress
    Running,
    /// Finished successfully
    Succeeded,
    /// Finished with an error
    Failed,
    /// Cancelled before finishing
    Cancelled,
    /// Any status this crate does not know about
    #[serde(other)]
    Other,
}

impl JobStatus {
    /// Whether the job can no longer change state
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            JobStatus::Succeeded | JobStatus::Failed | JobStatus::Cancelled
        )
    }

    /// Status as it appears in job listings
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::ValidatingFiles => "validating_files",
            JobStatus::Queued => "queued",
            JobStatus::Running => "running",
            JobStatus::Succeeded => "succeeded",
            JobStatus::Failed => "failed",
            JobStatus::Cancelled => "cancelled",
            JobStatus::Other => "other",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to the fields the reporter needs.
///
/// Implement this for job types coming from other clients to format them
/// without converting to [`JobRecord`].
pub trait JobInfo {
    /// Job identifier
    fn id(&self) -> &str;
    /// Creation time
    fn created_at(&self) -> DateTime<Utc>;
    /// Finish time, `None` while the job is still running
    fn finished_at(&self) -> Option<DateTime<Utc>>;
    /// Current status
    fn status(&self) -> JobStatus;
    /// Tokens trained so far, `None` when not reported
    fn trained_tokens(&self) -> Option<u64>;
    /// Training file reference
    fn training_file(&self) -> &str;
    /// Name of the resulting model, if any
    fn model_name(&self) -> Option<&str>;

    /// Elapsed time: `finished_at - created_at`, or `now - created_at` for a
    /// job that has not finished.
    fn elapsed(&self, now: DateTime<Utc>) -> TimeDelta {
        self.finished_at().unwrap_or(now) - self.created_at()
    }
}

/// A fine-tuning job as reported by the job listing endpoint.
///
/// Timestamps are unix seconds on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job identifier
    pub id: String,
    /// Creation time
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    /// Finish time
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub finished_at: Option<DateTime<Utc>>,
    /// Current status
    pub status: JobStatus,
    /// Tokens trained so far
    #[serde(default)]
    pub trained_tokens: Option<u64>,
    /// Training file reference
    pub training_file: String,
    /// Name of the resulting model
    #[serde(default)]
    pub fine_tuned_model: Option<String>,
}

impl JobRecord {
    /// Parse a job listing: either a JSON array of jobs or an object with a
    /// `data` array.
    pub fn parse_list(json: &str) -> Result<Vec<JobRecord>> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Listing {
            Bare(Vec<JobRecord>),
            Paged { data: Vec<JobRecord> },
        }

        match serde_json::from_str::<Listing>(json) {
            Ok(Listing::Bare(jobs)) | Ok(Listing::Paged { data: jobs }) => Ok(jobs),
            Err(e) => Err(PrepError::data_loading(format!(
                "Failed to parse job listing: {}",
                e
            ))),
        }
    }
}

impl JobInfo for JobRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    fn status(&self) -> JobStatus {
        self.status
    }

    fn trained_tokens(&self) -> Option<u64> {
        self.trained_tokens
    }

    fn training_file(&self) -> &str {
        &self.training_file
    }

    fn model_name(&self) -> Option<&str> {
        self.fine_tuned_model.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_job() {
        let json = r#"{
            "id": "ftjob-abc123",
            "created_at": 1700000000,
            "finished_at": 1700000600,
            "status": "succeeded",
            "trained_tokens": 12000,
            "training_file": "file-xyz",
            "fine_tuned_model": "ft:base:org::abc"
        }"#;
        let job: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(job.id(), "ftjob-abc123");
        assert_eq!(job.status(), JobStatus::Succeeded);
        assert_eq!(job.created_at(), Utc.timestamp_opt(1_700_000_000, 0).unwrap());
        assert_eq!(job.elapsed(Utc::now()), TimeDelta::minutes(10));
        assert_eq!(job.model_name(), Some("ft:base:org::abc"));
    }

    #[test]
    fn test_parse_running_job_with_nulls() {
        let json = r#"{
            "id": "ftjob-run",
            "created_at": 1700000000,
            "finished_at": null,
            "status": "running",
            "trained_tokens": null,
            "training_file": "file-1",
            "fine_tuned_model": null
        }"#;
        let job: JobRecord = serde_json::from_str(json).unwrap();
        assert!(job.finished_at().is_none());
        assert!(job.trained_tokens().is_none());
        assert!(!job.status().is_terminal());

        let now = Utc.timestamp_opt(1_700_000_120, 0).unwrap();
        assert_eq!(job.elapsed(now), TimeDelta::minutes(2));
    }

    #[test]
    fn test_unknown_status() {
        let status: JobStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(status, JobStatus::Other);
        assert_eq!(JobStatus::ValidatingFiles.to_string(), "validating_files");
    }

    #[test]
    fn test_parse_list() {
        let job = r#"{"id": "a", "created_at": 1, "status": "queued", "training_file": "f"}"#;
        let bare = format!("[{}]", job);
        let paged = format!("{{\"object\": \"list\", \"data\": [{}, {}]}}", job, job);

        assert_eq!(JobRecord::parse_list(&bare).unwrap().len(), 1);
        assert_eq!(JobRecord::parse_list(&paged).unwrap().len(), 2);
        assert!(JobRecord::parse_list("{\"data\": 3}").is_err());
    }
}
