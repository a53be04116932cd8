mod client;

pub use client::{MockDeliveryClient, MockItemsResult};
