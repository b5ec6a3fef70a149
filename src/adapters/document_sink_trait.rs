/// Interface for replacing the displayed document
///
/// The trigger does not render anything itself; the host environment
/// injects this capability. Replacement is destructive, the previous
/// content is not retained.
pub trait DocumentSink: Send + Sync {
    /// Replace the entire document with the given HTML
    fn replace(&self, html: &str);
}
