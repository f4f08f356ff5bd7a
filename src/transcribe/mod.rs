use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::events::ObjectLocation;

pub mod submitter;

pub use submitter::{JobSubmitter, TranscribeSubmitter};

#[cfg(test)]
pub use submitter::MockJobSubmitter;

/// Language every job is transcribed in
pub const LANGUAGE_CODE: &str = "hi-IN";

/// Container format of the uploaded recordings
pub const MEDIA_FORMAT: &str = "wav";

/// Everything needed for one `StartTranscriptionJob` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobRequest {
    /// `{bucket}_{key stem}`, passed through without sanitizing
    pub transcription_job_name: String,

    /// Always `LANGUAGE_CODE`
    pub language_code: String,

    /// Always `MEDIA_FORMAT`
    pub media_format: String,

    /// `s3://` URI of the uploaded recording
    pub media_file_uri: String,

    /// Bucket Transcribe writes the transcript JSON to
    pub output_bucket_name: String,

    /// Vocabulary and channel settings
    pub settings: JobSettings,

    /// Only present when deferred execution is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_execution_settings: Option<JobExecution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobSettings {
    /// Custom vocabulary applied to the job
    pub vocabulary_name: String,

    /// Transcribe each audio channel separately; always on
    pub channel_identification: bool,

    /// Return alternative transcriptions; always off
    pub show_alternatives: bool,
}

/// Lets Transcribe queue the job when concurrency limits are reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobExecution {
    /// Always `true` when the block is present
    pub allow_deferred_execution: bool,

    /// Role Transcribe assumes to read the media once the job starts
    pub data_access_role_arn: String,
}

impl JobRequest {
    /// Assemble the request for an uploaded object
    pub fn new(location: &ObjectLocation, config: &Config) -> Self {
        let job_execution_settings = config.deferred_execution_enabled().then(|| {
            tracing::debug!("Adding deferred execution settings on transcribe");
            JobExecution {
                allow_deferred_execution: true,
                data_access_role_arn: config.data_access_role_arn.clone(),
            }
        });

        Self {
            transcription_job_name: location.job_name(),
            language_code: LANGUAGE_CODE.to_string(),
            media_format: MEDIA_FORMAT.to_string(),
            media_file_uri: location.media_file_uri(),
            output_bucket_name: config.output_bucket_name.clone(),
            settings: JobSettings {
                vocabulary_name: config.vocabulary_name.clone(),
                channel_identification: true,
                show_alternatives: false,
            },
            job_execution_settings,
        }
    }
}

/// What Transcribe reported back for a started job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedJob {
    /// Job name as echoed by the service
    pub job_name: String,

    /// Initial job status, typically `QUEUED` or `IN_PROGRESS`
    pub status: Option<String>,
}
