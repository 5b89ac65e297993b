pub mod client;
pub mod delivery;

pub use client::BackendClient;
pub use delivery::DeliveryApi;
