use async_trait::async_trait;
use aws_sdk_transcribe::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_transcribe::types::{
    JobExecutionSettings, LanguageCode, Media, MediaFormat, Settings,
};
use aws_sdk_transcribe::Client as TranscribeClient;
use aws_types::SdkConfig;

use super::{JobRequest, SubmittedJob};
use crate::{ConsumerError, Result};

/// Sends a job request to the transcription service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobSubmitter: Send + Sync {
    /// Start one transcription job. Errors from the service are returned as-is
    /// and never retried.
    async fn submit(&self, request: &JobRequest) -> Result<SubmittedJob>;
}

/// `JobSubmitter` backed by Amazon Transcribe
#[derive(Debug, Clone)]
pub struct TranscribeSubmitter {
    client: TranscribeClient,
}

impl TranscribeSubmitter {
    pub fn new(aws_config: &SdkConfig) -> Self {
        Self::from_client(TranscribeClient::new(aws_config))
    }

    pub fn from_client(client: TranscribeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobSubmitter for TranscribeSubmitter {
    async fn submit(&self, request: &JobRequest) -> Result<SubmittedJob> {
        let media = Media::builder()
            .media_file_uri(&request.media_file_uri)
            .build();

        let settings = Settings::builder()
            .vocabulary_name(&request.settings.vocabulary_name)
            .channel_identification(request.settings.channel_identification)
            .show_alternatives(request.settings.show_alternatives)
            .build();

        let execution = request.job_execution_settings.as_ref().map(|execution| {
            JobExecutionSettings::builder()
                .allow_deferred_execution(execution.allow_deferred_execution)
                .data_access_role_arn(&execution.data_access_role_arn)
                .build()
        });

        let response = self
            .client
            .start_transcription_job()
            .transcription_job_name(&request.transcription_job_name)
            .language_code(LanguageCode::from(request.language_code.as_str()))
            .media_format(MediaFormat::from(request.media_format.as_str()))
            .media(media)
            .output_bucket_name(&request.output_bucket_name)
            .settings(settings)
            .set_job_execution_settings(execution)
            .send()
            .await
            .map_err(|err| ConsumerError::Submission {
                job_name: request.transcription_job_name.clone(),
                code: err.code().map(str::to_string),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        tracing::debug!(?response, "StartTranscriptionJob response");

        let job = response.transcription_job();
        Ok(SubmittedJob {
            job_name: job
                .and_then(|job| job.transcription_job_name())
                .unwrap_or(request.transcription_job_name.as_str())
                .to_string(),
            status: job
                .and_then(|job| job.transcription_job_status())
                .map(|status| status.as_str().to_string()),
        })
    }
}
