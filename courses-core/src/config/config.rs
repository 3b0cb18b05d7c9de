use anyhow::{anyhow, bail, Result};
use reqwest::header::HeaderValue;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8088/app";
pub const DEFAULT_SIGN: &str = "123";
pub const DEFAULT_TEACHER_ID: i64 = 1;

/// Teacher ids the course API accepts.
const TEACHER_ID_RANGE: std::ops::RangeInclusive<i64> = 1..=32;

/// Settings for talking to the course API.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL the `/courses` routes hang off.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Value of the `sign` header sent with every request.
    #[serde(default = "default_sign")]
    pub sign: String,
    /// Owner of the courses created through this client.
    #[serde(default = "default_teacher_id")]
    pub teacher_id: i64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_sign() -> String {
    DEFAULT_SIGN.to_string()
}

fn default_teacher_id() -> i64 {
    DEFAULT_TEACHER_ID
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            sign: default_sign(),
            teacher_id: default_teacher_id(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        if pretty {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api_url)
            .map_err(|e| anyhow!("Invalid api_url `{}`: {}", self.api_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("api_url must be an http(s) URL, got `{}`", self.api_url);
        }
        if url.cannot_be_a_base() {
            bail!("api_url `{}` cannot be used as a base URL", self.api_url);
        }
        if self.sign.is_empty() {
            bail!("sign must not be empty");
        }
        HeaderValue::from_str(&self.sign).map_err(|e| anyhow!("Invalid sign: {}", e))?;
        if !TEACHER_ID_RANGE.contains(&self.teacher_id) {
            bail!(
                "teacher_id must be between {} and {}, got {}",
                TEACHER_ID_RANGE.start(),
                TEACHER_ID_RANGE.end(),
                self.teacher_id
            );
        }
        Ok(())
    }
}
