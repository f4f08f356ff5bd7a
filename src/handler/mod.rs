use std::fmt::Debug;

use crate::config::Config;
use crate::events::{ObjectEvent, ObjectLocation};
use crate::transcribe::{JobRequest, JobSubmitter, SubmittedJob};
use crate::Result;

/// Turn one upload notification into one transcription job
///
/// Every failure before the submission (missing event fields, a bad ARN) returns
/// without contacting the service. Submission errors are passed through untouched.
pub async fn handle<E, S>(event: &E, config: &Config, submitter: &S) -> Result<SubmittedJob>
where
    E: ObjectEvent + Debug,
    S: JobSubmitter + ?Sized,
{
    let location = resolve(event)?;
    submit(&location, config, submitter).await
}

/// Resolve the uploaded object an event refers to
pub fn resolve<E>(event: &E) -> Result<ObjectLocation>
where
    E: ObjectEvent + Debug,
{
    tracing::info!(shape = event.shape(), "Starting transcribe job");
    tracing::debug!(?event, "Received event");

    event.object_location()
}

/// Build the job request for `location` and send it
pub async fn submit<S>(location: &ObjectLocation, config: &Config, submitter: &S) -> Result<SubmittedJob>
where
    S: JobSubmitter + ?Sized,
{
    let request = JobRequest::new(location, config);
    tracing::debug!(media_file_uri = %request.media_file_uri, "Resolved media location");
    tracing::info!("Deferred execution: {}", config.deferred_execution);

    let job = submitter.submit(&request).await?;

    tracing::info!(
        job_name = %job.job_name,
        status = job.status.as_deref().unwrap_or("UNKNOWN"),
        "Created transcribe job"
    );
    Ok(job)
}
