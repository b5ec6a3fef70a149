use async_trait::async_trait;
use relaytrigger::adapters::{RelayReply, RelaySender};
use relaytrigger::relay::request::RelayRequest;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Canned result for a given request kind
#[derive(Clone)]
pub enum Outcome {
    /// HTTP 200 with the given page
    Page(String),
    /// Any non-200 answer
    NoPage,
    /// The endpoint could not be reached
    TransportFailure,
}

pub struct MockRelaySender {
    pub sent_requests: Arc<Mutex<Vec<SentRequest>>>,
    outcomes: HashMap<&'static str, Outcome>,
    delays: HashMap<&'static str, Duration>,
}

#[derive(Debug, Clone)]
pub struct SentRequest {
    pub kind: String,
    pub form_body: String,
}

impl Default for MockRelaySender {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRelaySender {
    pub fn new() -> Self {
        Self {
            sent_requests: Arc::new(Mutex::new(Vec::new())),
            outcomes: HashMap::new(),
            delays: HashMap::new(),
        }
    }

    /// Configure the outcome returned for a request kind
    pub fn with_outcome(mut self, kind: &'static str, outcome: Outcome) -> Self {
        self.outcomes.insert(kind, outcome);
        self
    }

    /// Delay the reply for a request kind, to control arrival order
    pub fn with_delay(mut self, kind: &'static str, delay: Duration) -> Self {
        self.delays.insert(kind, delay);
        self
    }

    pub fn get_sent_requests(&self) -> Vec<SentRequest> {
        self.sent_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelaySender for MockRelaySender {
    async fn send(&self, request: &RelayRequest) -> anyhow::Result<Option<RelayReply>> {
        self.sent_requests.lock().unwrap().push(SentRequest {
            kind: request.kind().to_string(),
            form_body: request.form_body(),
        });

        if let Some(delay) = self.delays.get(request.kind()) {
            tokio::time::sleep(*delay).await;
        }

        match self.outcomes.get(request.kind()) {
            Some(Outcome::Page(html)) => Ok(Some(RelayReply::new(html.clone()))),
            Some(Outcome::NoPage) | None => Ok(None),
            Some(Outcome::TransportFailure) => Err(anyhow::anyhow!("connection refused")),
        }
    }
}
