pub mod request;
pub mod trigger;

pub use request::RelayRequest;
pub use trigger::RelayTrigger;
