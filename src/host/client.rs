//! gRPC client for calling plugin methods on the host application
//!
//! Payloads and results travel as JSON strings inside the protobuf messages,
//! mirroring the host's loosely typed plugin method contract.

use super::proto::{self, PluginHostClient};
use super::traits::{PluginCall, PluginHost, PluginResponse, ResponseStatus};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tonic::metadata::{Ascii, MetadataValue};
use tracing::Instrument;
use uuid::Uuid;

/// Default plugin host address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:50051";

/// Metadata key carrying the per-call request id
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Client for calling plugin methods on the host
pub struct HostClient {
    /// The gRPC client, connected lazily
    client: Mutex<Option<PluginHostClient>>,
    /// The host address
    address: String,
}

impl HostClient {
    /// Create a new host client, trying to connect right away
    pub async fn new(address: impl Into<String>) -> Self {
        let address = address.into();

        let client = match PluginHostClient::connect(address.clone()).await {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::debug!("Plugin host at {address} not reachable yet: {e}");
                None
            }
        };

        Self {
            client: Mutex::new(client),
            address,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Ensure connection is established and hand out a handle to it
    async fn ensure_connected(&self) -> Result<PluginHostClient> {
        let mut guard = self.client.lock().await;
        if guard.is_none() {
            *guard = Some(
                PluginHostClient::connect(self.address.clone())
                    .await
                    .map_err(|e| anyhow!("Failed to connect to plugin host: {}", e))?,
            );
        }
        guard
            .clone()
            .ok_or_else(|| anyhow!("Client not connected"))
    }
}

#[async_trait]
impl PluginHost for HostClient {
    async fn execute_plugin_method(&self, call: PluginCall) -> Result<PluginResponse> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "plugin_method",
            %request_id,
            plugin = %call.plugin,
            method = %call.method
        );

        async move {
            let mut client = self.ensure_connected().await?;

            let response = client
                .execute_plugin_method(build_request(&call, request_id)?)
                .await
                .map_err(|e| anyhow!("Failed to execute plugin method {}: {}", call.method, e))?;

            let response = decode_response(response.into_inner())?;
            tracing::debug!(code = response.status.code, "Plugin method answered");
            Ok(response)
        }
        .instrument(span)
        .await
    }
}

/// Wire request for `call`, tagged with the request id header
fn build_request(
    call: &PluginCall,
    request_id: Uuid,
) -> Result<tonic::Request<proto::PluginMethodRequest>> {
    let mut request = tonic::Request::new(encode_call(call)?);
    let header: MetadataValue<Ascii> = request_id.to_string().parse()?;
    request.metadata_mut().insert(REQUEST_ID_HEADER, header);
    Ok(request)
}

fn encode_call(call: &PluginCall) -> Result<proto::PluginMethodRequest> {
    Ok(proto::PluginMethodRequest {
        plugin: call.plugin.clone(),
        method: call.method.clone(),
        payload_json: serde_json::to_string(&call.payload)?,
        synchronous: call.synchronous,
    })
}

fn decode_response(response: proto::PluginMethodResponse) -> Result<PluginResponse> {
    let status = match response.status {
        Some(status) => ResponseStatus {
            code: status.code,
            message: status.message,
        },
        None => ResponseStatus::failed(-1, "response without status"),
    };

    // a failed call carries no usable result
    if status.is_failure() || response.result_json.trim().is_empty() {
        return Ok(PluginResponse {
            status,
            result: Value::Null,
        });
    }

    let result = serde_json::from_str(&response.result_json)
        .map_err(|e| anyhow!("Invalid result payload: {}", e))?;
    Ok(PluginResponse { status, result })
}
