//! Transcribe Event Consumer - Lambda functions that turn S3 upload notifications
//! into Amazon Transcribe jobs
//!
//! Two entry points share this library: one reads the bucket and key straight from
//! the CloudTrail request parameters, the other derives them from the object ARN in
//! the event's resource list.

pub mod arn;
pub mod config;
pub mod events;
pub mod handler;
pub mod lambda;
pub mod telemetry;
pub mod transcribe;

pub use arn::ParsedArn;
pub use config::{Config, LogConfig};
pub use events::{ObjectEvent, ObjectLocation, RequestParametersEvent, ResourcesEvent};
pub use handler::handle;
pub use transcribe::{JobRequest, JobSubmitter, SubmittedJob, TranscribeSubmitter};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to the event consumer
#[derive(thiserror::Error, Debug)]
pub enum ConsumerError {
    #[error("Event is missing required field: {0}")]
    MissingEventField(&'static str),

    #[error("No matching object resource found in event resources")]
    NoObjectResource,

    #[error("Malformed ARN {arn:?}: expected at least 6 colon-delimited segments, found {segments}")]
    MalformedArn { arn: String, segments: usize },

    #[error("ARN {0:?} has no resource type")]
    MissingResourceType(String),

    #[error("Required environment variable {0} is not set")]
    MissingEnvVar(&'static str),

    #[error(
        "Transcription job {job_name} was rejected ({}): {message}",
        .code.as_deref().unwrap_or("no error code")
    )]
    Submission {
        job_name: String,
        code: Option<String>,
        message: String,
    },
}
