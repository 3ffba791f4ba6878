//! Trait abstraction for the plugin host to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Outcome status of a plugin method call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseStatus {
    pub code: i32,
    pub message: String,
}

impl ResponseStatus {
    #[cfg(test)]
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failed(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Negative codes signal a failed call
    pub fn is_failure(&self) -> bool {
        self.code < 0
    }
}

/// One plugin method invocation
#[derive(Debug, Clone, PartialEq)]
pub struct PluginCall {
    pub plugin: String,
    pub method: String,
    pub payload: Value,
    /// Whether the host should run the method in the request thread
    pub synchronous: bool,
}

/// Response to a plugin method invocation
#[derive(Debug, Clone, PartialEq)]
pub struct PluginResponse {
    pub status: ResponseStatus,
    pub result: Value,
}

#[cfg(test)]
impl PluginResponse {
    pub fn ok(result: Value) -> Self {
        Self {
            status: ResponseStatus::ok(),
            result,
        }
    }
}

/// Content-fetch capability of the host application
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PluginHost: Send + Sync {
    /// Run a plugin method on the host and wait for its single response
    async fn execute_plugin_method(&self, call: PluginCall) -> Result<PluginResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_failure_is_negative_code() {
        assert!(!ResponseStatus::ok().is_failure());
        assert!(!ResponseStatus::failed(3, "warning").is_failure());
        assert!(ResponseStatus::failed(-1, "error").is_failure());
    }
}
