mod client;
mod options;

pub use client::KontentDeliveryClient;
pub use options::KontentDeliveryOptions;
