use crate::adapters::{DocumentSink, RelaySender};
use crate::relay::request::RelayRequest;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Bridge UI button events to the relay endpoint
///
/// Each notify operation is a one-shot: build the request, send it, and if
/// the relay answered with a page, hand it to the document sink. Nothing is
/// shared between calls and no ordering is guaranteed between concurrent
/// calls; whichever reply is applied last overwrites the document.
pub struct RelayTrigger<S, D>
where
    S: RelaySender,
    D: DocumentSink,
{
    sender: Arc<S>,
    document: Arc<D>,
}

impl<S, D> RelayTrigger<S, D>
where
    S: RelaySender,
    D: DocumentSink,
{
    /// Create a new RelayTrigger
    ///
    /// # Arguments
    ///
    /// * `sender` - The sender delivering requests to the relay
    /// * `document` - The sink receiving a successful reply's HTML
    pub fn new(sender: Arc<S>, document: Arc<D>) -> Self {
        Self { sender, document }
    }

    /// Notify the relay that a configuration button was clicked
    ///
    /// # Arguments
    ///
    /// * `display_name` - Label of the activated button, passed through
    ///   verbatim
    pub async fn notify_configuration_button_clicked(&self, display_name: &str) {
        debug!(%display_name, "Processing configuration button click");
        let request = RelayRequest::configuration_button_clicked(display_name);
        self.dispatch(&request).await;
    }

    /// Notify the relay that the collect-rewards button was clicked
    pub async fn notify_rewards_collected(&self) {
        debug!("Processing collect rewards click");
        let request = RelayRequest::CollectRewardButtonClicked;
        self.dispatch(&request).await;
    }

    /// Send one request and apply a successful reply to the document
    ///
    /// Fire-and-forget policy: a non-200 answer, an unreadable body, or a
    /// transport failure leaves the document untouched and surfaces nothing
    /// to the caller beyond a log line.
    async fn dispatch(&self, request: &RelayRequest) {
        match self.sender.send(request).await {
            Ok(Some(reply)) => {
                self.document.replace(&reply.html);
                info!(
                    kind = %request.kind(),
                    body_len = reply.html.len(),
                    "Applied relay reply to document"
                );
            }
            Ok(None) => {
                debug!(kind = %request.kind(), "Relay returned no page, document unchanged");
            }
            Err(err) => {
                error!(?err, kind = %request.kind(), "Failed to reach relay endpoint");
            }
        }
    }
}
