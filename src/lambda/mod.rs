use std::fmt::Debug;

use lambda_runtime::{service_fn, LambdaEvent};
use serde::de::DeserializeOwned;
use tracing::Instrument;

use crate::config::{Config, LogConfig};
use crate::events::ObjectEvent;
use crate::handler;
use crate::telemetry;
use crate::transcribe::{JobSubmitter, SubmittedJob, TranscribeSubmitter};
use crate::{ConsumerError, Result};

/// Run the Lambda runtime loop for one event shape
pub async fn serve<E>() -> std::result::Result<(), lambda_runtime::Error>
where
    E: ObjectEvent + DeserializeOwned + Debug + Send + 'static,
{
    telemetry::init(&LogConfig::from_env());

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    let submitter = TranscribeSubmitter::new(&aws_config);
    tracing::debug!("Initialized transcribe client");

    let submitter = &submitter;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<E>| async move {
        invoke(event, submitter)
            .await
            .map_err(lambda_runtime::Error::from)
    }))
    .await
}

/// Handle a single invocation with configuration from the process environment
pub async fn invoke<E, S>(event: LambdaEvent<E>, submitter: &S) -> Result<SubmittedJob>
where
    E: ObjectEvent + Debug,
    S: JobSubmitter + ?Sized,
{
    invoke_with(event, |name| std::env::var(name).ok(), submitter).await
}

/// Handle a single invocation inside its own span
///
/// The event is resolved before configuration is read, so a bad event is reported
/// as such even when the environment is incomplete.
pub async fn invoke_with<E, F, S>(
    event: LambdaEvent<E>,
    lookup: F,
    submitter: &S,
) -> Result<SubmittedJob>
where
    E: ObjectEvent + Debug,
    F: Fn(&str) -> Option<String>,
    S: JobSubmitter + ?Sized,
{
    let span = tracing::info_span!("invocation", request_id = %event.context.request_id);

    async {
        let result = async {
            let location = handler::resolve(&event.payload)?;
            let config = Config::from_lookup(&lookup)?;
            handler::submit(&location, &config, submitter).await
        }
        .await;

        if let Err(err) = &result {
            let code = match err.downcast_ref::<ConsumerError>() {
                Some(ConsumerError::Submission { code, .. }) => code.as_deref(),
                _ => None,
            };
            tracing::error!(
                error_code = code.unwrap_or("none"),
                "Transcribe job submission failed: {err:#}"
            );
        }
        result
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        OUTPUT_BUCKET_NAME, TRANSCRIBE_CUSTOM_VOCABULARY, TRANSCRIBE_DATA_ACCESS_ROLE_ARN,
        TRANSCRIBE_DEFERRED_EXECUTION,
    };
    use crate::events::RequestParametersEvent;
    use crate::transcribe::{JobRequest, MockJobSubmitter};
    use lambda_runtime::Context;
    use serde_json::json;
    use std::collections::HashMap;

    fn scenario_env() -> HashMap<String, String> {
        [
            (OUTPUT_BUCKET_NAME, "out"),
            (TRANSCRIBE_CUSTOM_VOCABULARY, "vocab1"),
            (TRANSCRIBE_DATA_ACCESS_ROLE_ARN, "role-x"),
            (TRANSCRIBE_DEFERRED_EXECUTION, "False"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn lambda_event(payload: serde_json::Value) -> LambdaEvent<RequestParametersEvent> {
        LambdaEvent::new(serde_json::from_value(payload).unwrap(), Context::default())
    }

    fn upload_event() -> LambdaEvent<RequestParametersEvent> {
        lambda_event(json!({
            "detail": { "requestParameters": { "bucketName": "audio-in", "key": "call1.wav" } }
        }))
    }

    #[tokio::test]
    async fn test_missing_env_var_fails_invocation() {
        let mut submitter = MockJobSubmitter::new();
        submitter.expect_submit().never();

        let mut vars = scenario_env();
        vars.remove(TRANSCRIBE_DEFERRED_EXECUTION);

        let err = invoke_with(upload_event(), |name| vars.get(name).cloned(), &submitter)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConsumerError>(),
            Some(ConsumerError::MissingEnvVar(TRANSCRIBE_DEFERRED_EXECUTION))
        ));
    }

    #[tokio::test]
    async fn test_invocation_submits_job() {
        let mut submitter = MockJobSubmitter::new();
        submitter
            .expect_submit()
            .times(1)
            .withf(|request: &JobRequest| {
                request.transcription_job_name == "audio-in_call1"
                    && request.media_file_uri == "s3://audio-in/call1.wav"
                    && request.job_execution_settings.is_none()
            })
            .returning(|request| {
                Ok(SubmittedJob {
                    job_name: request.transcription_job_name.clone(),
                    status: Some("QUEUED".to_string()),
                })
            });

        let vars = scenario_env();
        let job = invoke_with(upload_event(), |name| vars.get(name).cloned(), &submitter)
            .await
            .unwrap();

        assert_eq!(
            job,
            SubmittedJob {
                job_name: "audio-in_call1".to_string(),
                status: Some("QUEUED".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_submission_error_is_returned_unchanged() {
        let mut submitter = MockJobSubmitter::new();
        submitter.expect_submit().times(1).returning(|request| {
            Err(ConsumerError::Submission {
                job_name: request.transcription_job_name.clone(),
                code: Some("LimitExceededException".to_string()),
                message: "Too many jobs".to_string(),
            }
            .into())
        });

        let vars = scenario_env();
        let err = invoke_with(upload_event(), |name| vars.get(name).cloned(), &submitter)
            .await
            .unwrap_err();

        match err.downcast_ref::<ConsumerError>() {
            Some(ConsumerError::Submission {
                job_name,
                code,
                message,
            }) => {
                assert_eq!(job_name, "audio-in_call1");
                assert_eq!(code.as_deref(), Some("LimitExceededException"));
                assert_eq!(message, "Too many jobs");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_event_errors_are_reported_before_env_errors() {
        let mut submitter = MockJobSubmitter::new();
        submitter.expect_submit().never();

        let event = lambda_event(json!({
            "detail": { "requestParameters": { "bucketName": "audio-in" } }
        }));
        let err = invoke_with(event, |_| None, &submitter).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConsumerError>(),
            Some(ConsumerError::MissingEventField("detail.requestParameters.key"))
        ));
    }
}
