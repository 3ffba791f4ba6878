//! Wire types and client stub of the `forminfo.host.PluginHost` gRPC service
//!
//! ```proto
//! service PluginHost {
//!   rpc ExecutePluginMethod(PluginMethodRequest) returns (PluginMethodResponse);
//! }
//! ```

use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};

const EXECUTE_PLUGIN_METHOD_PATH: &str = "/forminfo.host.PluginHost/ExecutePluginMethod";

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PluginMethodRequest {
    #[prost(string, tag = "1")]
    pub plugin: String,
    #[prost(string, tag = "2")]
    pub method: String,
    /// JSON encoded request payload
    #[prost(string, tag = "3")]
    pub payload_json: String,
    #[prost(bool, tag = "4")]
    pub synchronous: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResponseStatus {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PluginMethodResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<ResponseStatus>,
    /// JSON encoded result, empty when the method returned nothing
    #[prost(string, tag = "2")]
    pub result_json: String,
}

/// Unary client for the plugin host service
#[derive(Debug, Clone)]
pub struct PluginHostClient {
    inner: tonic::client::Grpc<Channel>,
}

impl PluginHostClient {
    pub async fn connect(address: String) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::new(address)?.connect().await?;
        Ok(Self {
            inner: tonic::client::Grpc::new(channel),
        })
    }

    pub async fn execute_plugin_method(
        &mut self,
        request: tonic::Request<PluginMethodRequest>,
    ) -> Result<tonic::Response<PluginMethodResponse>, tonic::Status> {
        self.inner
            .ready()
            .await
            .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {e}")))?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static(EXECUTE_PLUGIN_METHOD_PATH);
        self.inner.unary(request, path, codec).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    /// Status and response as a host encodes them
    #[derive(Clone, PartialEq, ::prost::Message)]
    struct HostStatus {
        #[prost(int32, tag = "1")]
        code: i32,
        #[prost(string, tag = "2")]
        message: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    struct HostResponse {
        #[prost(message, optional, tag = "1")]
        status: Option<HostStatus>,
        #[prost(string, tag = "2")]
        result_json: String,
    }

    #[test]
    fn test_request_field_tags() {
        let request = PluginMethodRequest {
            plugin: "P".to_string(),
            method: "m".to_string(),
            payload_json: "{}".to_string(),
            synchronous: true,
        };

        assert_eq!(
            request.encode_to_vec(),
            vec![
                0x0a, 1, b'P', // 1: plugin
                0x12, 1, b'm', // 2: method
                0x1a, 2, b'{', b'}', // 3: payload_json
                0x20, 1, // 4: synchronous
            ]
        );
    }

    #[test]
    fn test_response_field_tags() {
        let response = PluginMethodResponse {
            status: Some(ResponseStatus {
                code: 3,
                message: "x".to_string(),
            }),
            result_json: "[]".to_string(),
        };

        assert_eq!(
            response.encode_to_vec(),
            vec![0x0a, 5, 0x08, 3, 0x12, 1, b'x', 0x12, 2, b'[', b']']
        );
    }

    #[test]
    fn test_decode_host_encoded_response() {
        let bytes = HostResponse {
            status: Some(HostStatus {
                code: -1,
                message: "Plugin not found".to_string(),
            }),
            result_json: r#"{"id":12}"#.to_string(),
        }
        .encode_to_vec();

        let response = PluginMethodResponse::decode(bytes.as_slice()).unwrap();
        let status = response.status.unwrap();
        assert_eq!(status.code, -1);
        assert_eq!(status.message, "Plugin not found");
        assert_eq!(response.result_json, r#"{"id":12}"#);
    }

    #[test]
    fn test_decode_response_without_status() {
        let bytes = HostResponse {
            status: None,
            result_json: "[]".to_string(),
        }
        .encode_to_vec();

        let response = PluginMethodResponse::decode(bytes.as_slice()).unwrap();
        assert!(response.status.is_none());
        assert_eq!(response.result_json, "[]");
    }

    #[test]
    fn test_method_path() {
        let path = PathAndQuery::from_static(EXECUTE_PLUGIN_METHOD_PATH);
        assert_eq!(path.path(), "/forminfo.host.PluginHost/ExecutePluginMethod");
    }
}
