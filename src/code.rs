use crate::error::RequestError;
use serde::{Deserialize, Deserializer, Serialize};

/// `null` reads the same as an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub status: RunStatus,
    pub output: String,
}

#[derive(Debug, Deserialize)]
pub struct FixRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct FixResponse {
    pub fixed_code: String,
}

#[derive(Debug, Deserialize)]
pub struct HelpRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct HelpResponse {
    pub help: String,
}

// Rejections travel in the same field a successful answer would use.
impl From<RequestError> for RunResponse {
    fn from(err: RequestError) -> Self {
        RunResponse {
            status: RunStatus::Error,
            output: err.to_string(),
        }
    }
}

impl From<RequestError> for FixResponse {
    fn from(err: RequestError) -> Self {
        FixResponse {
            fixed_code: err.to_string(),
        }
    }
}

impl From<RequestError> for HelpResponse {
    fn from(err: RequestError) -> Self {
        HelpResponse {
            help: err.to_string(),
        }
    }
}
