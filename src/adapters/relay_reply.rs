/// Reply from the relay endpoint
///
/// The relay answers a successful notification with a complete HTML page
/// meant to replace whatever is currently displayed. The markup is passed
/// through raw, without sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    /// Raw HTML returned by the relay
    pub html: String,
}

impl RelayReply {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}
