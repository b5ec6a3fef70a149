// Trait definitions
pub mod document_sink_trait;
pub mod relay_sender_trait;

// Type definitions
pub mod relay_reply;

// Implementations
pub mod http_relay_sender;
pub mod memory_document;

// Re-exports for convenience
pub use document_sink_trait::DocumentSink;
pub use http_relay_sender::HttpRelaySender;
pub use memory_document::MemoryDocument;
pub use relay_reply::RelayReply;
pub use relay_sender_trait::RelaySender;
