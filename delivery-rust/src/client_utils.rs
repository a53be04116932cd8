use crate::DeliveryError;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Send a GET request with the given query pairs, parse the JSON response.
/// Throws error on non OK status code.
pub async fn get_json<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(String, String)],
    headers: reqwest::header::HeaderMap,
) -> Result<R, DeliveryError> {
    let response = client.get(url).headers(headers).query(query).send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<R>().await?)
    } else {
        Err(DeliveryError::StatusCode(
            status,
            response.text().await.unwrap_or_default(),
        ))
    }
}
