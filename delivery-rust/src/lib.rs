mod client_utils;
mod delivery_client;
pub mod delivery_test;
mod errors;
pub mod kontent;
mod opentelemetry;
mod query;
mod types;

pub use delivery_client::DeliveryClient;
pub use errors::*;
pub use query::{ItemsQuery, QueryFilter};
pub use types::*;
