use serde::{Deserialize, Serialize};

use super::{EventEnvelope, ObjectEvent, ObjectLocation};
use crate::arn::ParsedArn;
use crate::{ConsumerError, Result};

/// CloudTrail resource type of an S3 object
pub const S3_OBJECT_RESOURCE_TYPE: &str = "AWS::S3::Object";

/// Event carrying the uploaded object as an ARN in the CloudTrail resource list
pub type ResourcesEvent = EventEnvelope<ResourcesDetail>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesDetail {
    #[serde(rename = "eventName", default)]
    pub event_name: Option<String>,

    #[serde(default)]
    pub resources: Option<Vec<EventResource>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventResource {
    #[serde(rename = "type", default)]
    pub resource_type: Option<String>,

    #[serde(rename = "ARN", default)]
    pub arn: Option<String>,

    #[serde(rename = "accountId", default)]
    pub account_id: Option<String>,
}

impl ResourcesDetail {
    /// First resource typed as an S3 object
    pub fn object_resource(&self) -> Option<&EventResource> {
        self.resources
            .as_deref()?
            .iter()
            .find(|resource| resource.resource_type.as_deref() == Some(S3_OBJECT_RESOURCE_TYPE))
    }
}

impl ObjectEvent for ResourcesEvent {
    fn shape(&self) -> &'static str {
        "resource-arn"
    }

    fn object_location(&self) -> Result<ObjectLocation> {
        let detail = self
            .detail
            .as_ref()
            .ok_or(ConsumerError::MissingEventField("detail"))?;
        if detail.resources.is_none() {
            return Err(ConsumerError::MissingEventField("detail.resources").into());
        }

        let resource = detail
            .object_resource()
            .ok_or(ConsumerError::NoObjectResource)?;
        let arn = resource
            .arn
            .as_deref()
            .ok_or(ConsumerError::MissingEventField("detail.resources[].ARN"))?;

        let parsed = ParsedArn::parse(arn)?;
        tracing::debug!(?parsed, "Parsed object ARN");

        // For S3 object ARNs the resource type is the bucket and the name is the key.
        let bucket = parsed
            .resource_type
            .ok_or_else(|| ConsumerError::MissingResourceType(arn.to_string()))?;

        Ok(ObjectLocation::new(bucket, parsed.resource_name))
    }
}
