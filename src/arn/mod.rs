use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::ConsumerError;

/// Number of colon-delimited parts an ARN is split into. The last part keeps any
/// further colons so it can be broken into resource type and name.
const ARN_PARTS: usize = 6;

/// An ARN broken into its components
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedArn {
    /// Literal `arn` prefix
    pub arn: String,

    pub partition: String,

    pub service: String,

    /// Empty for global services such as S3
    pub region: String,

    /// Empty for global services such as S3
    pub account: String,

    /// Part of the resource segment before the first `/` or `:`
    pub resource_type: Option<String>,

    /// Remainder of the resource segment, or all of it when there is no type
    pub resource_name: String,
}

impl ParsedArn {
    pub fn parse(arn: &str) -> Result<Self, ConsumerError> {
        let parts: Vec<&str> = arn.splitn(ARN_PARTS, ':').collect();
        if parts.len() < ARN_PARTS {
            return Err(ConsumerError::MalformedArn {
                arn: arn.to_string(),
                segments: parts.len(),
            });
        }

        let resource = parts[5];
        let (resource_type, resource_name) = match resource
            .split_once('/')
            .or_else(|| resource.split_once(':'))
        {
            Some((resource_type, name)) => (Some(resource_type.to_string()), name.to_string()),
            None => (None, resource.to_string()),
        };

        Ok(Self {
            arn: parts[0].to_string(),
            partition: parts[1].to_string(),
            service: parts[2].to_string(),
            region: parts[3].to_string(),
            account: parts[4].to_string(),
            resource_type,
            resource_name,
        })
    }
}

impl FromStr for ParsedArn {
    type Err = ConsumerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ParsedArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:",
            self.arn, self.partition, self.service, self.region, self.account
        )?;
        match &self.resource_type {
            Some(resource_type) => write!(f, "{}/{}", resource_type, self.resource_name),
            None => write!(f, "{}", self.resource_name),
        }
    }
}
