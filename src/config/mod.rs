use serde::{Deserialize, Serialize};

use crate::{ConsumerError, Result};

pub const OUTPUT_BUCKET_NAME: &str = "OUTPUT_BUCKET_NAME";
pub const TRANSCRIBE_CUSTOM_VOCABULARY: &str = "TRANSCRIBE_CUSTOM_VOCABULARY";
pub const TRANSCRIBE_DATA_ACCESS_ROLE_ARN: &str = "TRANSCRIBE_DATA_ACCESS_ROLE_ARN";
pub const TRANSCRIBE_DEFERRED_EXECUTION: &str = "TRANSCRIBE_DEFERRED_EXECUTION";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const RUST_LOG: &str = "RUST_LOG";

/// Level used when `LOG_LEVEL` is not set
pub const DEFAULT_LOG_LEVEL: &str = "DEBUG";

/// Only this exact value turns deferred execution on
const DEFERRED_EXECUTION_ENABLED: &str = "True";

/// Per-invocation settings read from the function environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bucket that receives the transcript output
    pub output_bucket_name: String,

    /// Custom vocabulary applied to every job
    pub vocabulary_name: String,

    /// Role Transcribe assumes to fetch media when the job is deferred
    pub data_access_role_arn: String,

    /// Raw value of `TRANSCRIBE_DEFERRED_EXECUTION`
    pub deferred_execution: String,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| lookup(name).ok_or(ConsumerError::MissingEnvVar(name));

        Ok(Self {
            output_bucket_name: require(OUTPUT_BUCKET_NAME)?,
            vocabulary_name: require(TRANSCRIBE_CUSTOM_VOCABULARY)?,
            data_access_role_arn: require(TRANSCRIBE_DATA_ACCESS_ROLE_ARN)?,
            deferred_execution: require(TRANSCRIBE_DEFERRED_EXECUTION)?,
        })
    }

    /// Whether jobs should be submitted with deferred execution allowed
    pub fn deferred_execution_enabled(&self) -> bool {
        self.deferred_execution == DEFERRED_EXECUTION_ENABLED
    }
}

/// Process-wide logging settings, read once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Baseline level name from `LOG_LEVEL`
    pub level: String,

    /// Extra per-target directives from `RUST_LOG`, layered over the baseline
    pub directives: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            directives: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: lookup(LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            directives: lookup(RUST_LOG),
        }
    }
}
