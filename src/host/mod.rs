//! Plugin host client module for gRPC communication

mod client;
mod proto;
mod traits;

pub use client::{HostClient, DEFAULT_ADDRESS};
pub use traits::{PluginCall, PluginHost, PluginResponse, ResponseStatus};

#[cfg(test)]
pub use traits::MockPluginHost;
