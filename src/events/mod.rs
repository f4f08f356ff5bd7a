use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod request_parameters;
pub mod resources;

pub use request_parameters::{RequestParameters, RequestParametersDetail, RequestParametersEvent};
pub use resources::{EventResource, ResourcesDetail, ResourcesEvent, S3_OBJECT_RESOURCE_TYPE};

use crate::Result;

/// EventBridge envelope around a CloudTrail-sourced S3 notification
///
/// Only `detail` carries data the consumer acts on; the remaining fields are kept
/// for diagnostics and may be absent in hand-built test events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope<D> {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "detail-type", default)]
    pub detail_type: Option<String>,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub account: Option<String>,

    #[serde(default)]
    pub time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub region: Option<String>,

    pub detail: Option<D>,
}

/// The uploaded object an event refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// `{bucket}_{key up to the first dot}`
    ///
    /// Characters Transcribe rejects in job names are passed through unchanged.
    pub fn job_name(&self) -> String {
        let stem = self.key.split('.').next().unwrap_or_default();
        format!("{}_{}", self.bucket, stem)
    }

    /// `s3://{bucket}/{key}` without percent-encoding
    pub fn media_file_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

/// An event shape the consumer knows how to resolve to an uploaded object
pub trait ObjectEvent {
    /// Short name of the event shape, used in log lines
    fn shape(&self) -> &'static str;

    /// Resolve the bucket and key this event refers to
    fn object_location(&self) -> Result<ObjectLocation>;
}
