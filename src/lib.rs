pub mod adapters;
pub mod params;
pub mod relay;
