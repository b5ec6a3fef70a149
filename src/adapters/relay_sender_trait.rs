use crate::adapters::relay_reply::RelayReply;
use crate::relay::request::RelayRequest;
use async_trait::async_trait;

/// Interface for delivering relay requests to an external endpoint
#[async_trait]
pub trait RelaySender: Send + Sync {
    /// Send a relay request and retrieve the reply
    ///
    /// # Returns
    ///
    /// * `Ok(Some(RelayReply))` - the relay accepted the request (HTTP 200)
    /// * `Ok(None)` - the relay answered with any other status
    /// * `Err(_)` - the request could not be delivered at all
    async fn send(&self, request: &RelayRequest) -> anyhow::Result<Option<RelayReply>>;
}
