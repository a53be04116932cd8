use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the Delivery API failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-OK status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response was well-formed JSON but did not have the shape the
    /// caller expected (e.g. an asset element whose value is not a list).
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type DeliveryResult<T> = Result<T, DeliveryError>;
