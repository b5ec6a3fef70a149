/// A single outbound relay notification
///
/// Transient: exists only for the duration of one POST and carries no
/// identity beyond it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayRequest {
    /// One of the configuration buttons was activated
    ConfigurationButtonClicked {
        /// Caller-supplied label identifying which button
        button: String,
    },
    /// The collect-rewards button was activated
    CollectRewardButtonClicked,
}

impl RelayRequest {
    /// Create a configuration-button request for the given display name
    pub fn configuration_button_clicked(display_name: &str) -> Self {
        Self::ConfigurationButtonClicked {
            button: display_name.to_string(),
        }
    }

    /// The wire `type` tag for this request
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigurationButtonClicked { .. } => "configuration_button_clicked",
            Self::CollectRewardButtonClicked => "collect_reward_button_clicked",
        }
    }

    /// Build the URL-encoded form body for this request
    ///
    /// The display name is concatenated verbatim, without percent-encoding.
    /// The relay's existing server accepts the raw concatenation, so a name
    /// containing `&` or `=` corrupts the encoding. Do not escape here
    /// without changing the wire contract on the server side too.
    pub fn form_body(&self) -> String {
        match self {
            Self::ConfigurationButtonClicked { button } => format!(
                "relay_request=true&type=configuration_button_clicked&button={}",
                button
            ),
            Self::CollectRewardButtonClicked => {
                "relay_request=true&type=collect_reward_button_clicked".to_string()
            }
        }
    }
}
