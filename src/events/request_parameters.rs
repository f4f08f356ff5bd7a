use serde::{Deserialize, Serialize};

use super::{EventEnvelope, ObjectEvent, ObjectLocation};
use crate::{ConsumerError, Result};

/// Event carrying the bucket and key in the CloudTrail request parameters
pub type RequestParametersEvent = EventEnvelope<RequestParametersDetail>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestParametersDetail {
    #[serde(rename = "eventName", default)]
    pub event_name: Option<String>,

    #[serde(rename = "requestParameters", default)]
    pub request_parameters: Option<RequestParameters>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestParameters {
    #[serde(rename = "bucketName", default)]
    pub bucket_name: Option<String>,

    #[serde(default)]
    pub key: Option<String>,
}

impl ObjectEvent for RequestParametersEvent {
    fn shape(&self) -> &'static str {
        "request-parameters"
    }

    fn object_location(&self) -> Result<ObjectLocation> {
        let params = self
            .detail
            .as_ref()
            .ok_or(ConsumerError::MissingEventField("detail"))?
            .request_parameters
            .as_ref()
            .ok_or(ConsumerError::MissingEventField("detail.requestParameters"))?;

        let bucket = params
            .bucket_name
            .as_deref()
            .ok_or(ConsumerError::MissingEventField("detail.requestParameters.bucketName"))?;
        let key = params
            .key
            .as_deref()
            .ok_or(ConsumerError::MissingEventField("detail.requestParameters.key"))?;

        Ok(ObjectLocation::new(bucket, key))
    }
}
