//! Authenticated JSON requests over gloo-net

use expense_core::FetchError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// `GET url` with an optional bearer token, decoded as JSON
///
/// Non-2xx answers become [`FetchError::Status`]; nothing is retried.
pub async fn get_json<T: DeserializeOwned>(url: &str, bearer: Option<&str>) -> Result<T, FetchError> {
    let mut request = Request::get(url).header("Accept", "application/json");
    if let Some(bearer) = bearer {
        request = request.header("Authorization", bearer);
    }

    let response = request.send().await.map_err(|err| {
        web_sys::console::error_1(&format!("Request to {} failed: {}", url, err).into());
        FetchError::Transport(err.to_string())
    })?;

    if !response.ok() {
        web_sys::console::error_1(&format!("HTTP error: {} ({})", response.status(), url).into());
        return Err(FetchError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}
