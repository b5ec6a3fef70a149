// Mock implementations for adapter layer testing

pub mod mock_relay_sender;

pub use mock_relay_sender::{MockRelaySender, Outcome};
