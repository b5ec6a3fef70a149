use super::relay_reply::RelayReply;
use super::relay_sender_trait::RelaySender;
use crate::relay::request::RelayRequest;
use anyhow::Context as _;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Implementation for delivering relay requests over HTTP
pub struct HttpRelaySender {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpRelaySender {
    /// Create a new HttpRelaySender
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The relay endpoint URL
    /// * `timeout` - Overall request timeout
    /// * `connect_timeout` - Connection establishment timeout
    /// * `insecure_mode` - If true, accept invalid TLS certificates
    pub fn new(
        endpoint: Url,
        timeout: Duration,
        connect_timeout: Duration,
        insecure_mode: bool,
    ) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .danger_accept_invalid_certs(insecure_mode)
            .build()
            .context("Building HTTP Client")?;

        Ok(Self { client, endpoint })
    }

    /// Get the endpoint URL (for testing)
    #[cfg(test)]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RelaySender for HttpRelaySender {
    async fn send(&self, request: &RelayRequest) -> anyhow::Result<Option<RelayReply>> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(request.form_body())
            .send()
            .await?;

        let status = response.status();

        // The relay contract is 200-or-nothing: any other status carries no
        // page to display.
        if status != reqwest::StatusCode::OK {
            debug!(
                %status,
                kind = %request.kind(),
                "Relay answered with non-200 status, reply discarded"
            );
            return Ok(None);
        }

        match response.text().await {
            Ok(html) => {
                debug!(
                    %status,
                    kind = %request.kind(),
                    body_len = html.len(),
                    "Received relay reply"
                );
                Ok(Some(RelayReply::new(html)))
            }
            Err(err) => {
                warn!(
                    ?err,
                    kind = %request.kind(),
                    "Relay answered 200 but the body could not be read"
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeouts() -> (Duration, Duration) {
        (Duration::from_secs(30), Duration::from_secs(10))
    }

    #[test]
    fn test_http_relay_sender_creation() {
        let url = Url::parse("https://example.com/relay").unwrap();
        let (timeout, connect) = timeouts();
        let sender = HttpRelaySender::new(url, timeout, connect, false);
        assert!(sender.is_ok());
    }

    #[test]
    fn test_http_relay_sender_creation_insecure() {
        let url = Url::parse("https://example.com/relay").unwrap();
        let (timeout, connect) = timeouts();
        let sender = HttpRelaySender::new(url, timeout, connect, true);
        assert!(sender.is_ok());
    }

    #[test]
    fn test_endpoint_getter() {
        let url_str = "https://example.com/relay";
        let url = Url::parse(url_str).unwrap();
        let (timeout, connect) = timeouts();
        let sender = HttpRelaySender::new(url, timeout, connect, false).unwrap();
        assert_eq!(sender.endpoint().as_str(), url_str);
    }
}
