//! HTTP client for the JSON API
//!
//! One module per resource; loader functions issue GETs against fixed
//! endpoint paths and unwrap the response envelope, action functions send
//! exactly one mutating request. Loaders do no retries and no caching.

pub mod balances;
pub mod orders;
pub mod portfolios;
pub mod positions;
pub mod reports;
pub mod repository;
pub mod settings;
pub mod statements;
pub mod trades;

use crate::error::{AppError, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Client for the portfolio JSON API
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API at `base_url` (scheme://host:port, no path)
    pub fn new(base_url: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into a typed error carrying the server's
    /// message, so failures never surface as JSON parse errors.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<Value>().await {
            Ok(body) => body["error"]["message"]
                .as_str()
                .unwrap_or(status.canonical_reason().unwrap_or("request failed"))
                .to_string(),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }

    pub(crate) async fn get_json(&self, path: &str) -> Result<Value> {
        tracing::debug!("GET {}", path);
        let response = self.http.get(self.url(path)).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value> {
        tracing::debug!("POST {}", path);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// POST with an empty body, for command endpoints
    pub(crate) async fn post_empty(&self, path: &str) -> Result<Value> {
        tracing::debug!("POST {}", path);
        let response = self
            .http
            .post(self.url(path))
            .json(&Value::Null)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub(crate) async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value> {
        tracing::debug!("PUT {}", path);
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        tracing::debug!("DELETE {}", path);
        let response = self.http.delete(self.url(path)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

/// Unwrap the `{ "<resource>": ... }` envelope every endpoint uses
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(mut value: Value, key: &str) -> Result<T> {
    let inner = value
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| AppError::Decode(format!("response missing '{}' envelope", key)))?;
    Ok(serde_json::from_value(inner)?)
}

/// Coerce a numeric form field submitted as a string
pub(crate) fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid value for {}: '{}'", field, raw)))
}

/// Coerce an optional numeric form field; empty input means absent
pub(crate) fn parse_optional_number<T: std::str::FromStr>(
    field: &str,
    raw: &str,
) -> Result<Option<T>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_number(field, trimmed).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope() {
        let v = json!({ "balances": [{ "id": 1, "portfolio_id": 2, "currency": "USD", "quantity": 10.0 }] });
        let balances: Vec<crate::models::Balance> = unwrap_envelope(v, "balances").unwrap();
        assert_eq!(balances[0].currency, "USD");

        let err = unwrap_envelope::<Vec<crate::models::Balance>>(json!({}), "balances");
        assert!(matches!(err, Err(AppError::Decode(_))));
    }

    #[test]
    fn test_parse_number_coercion() {
        assert_eq!(parse_number::<i32>("strategy", "3").unwrap(), 3);
        assert_eq!(parse_number::<f64>("risk", " 9500.5 ").unwrap(), 9500.5);
        assert!(parse_number::<i32>("strategy", "wheel").is_err());
        assert_eq!(parse_optional_number::<f64>("risk", "").unwrap(), None);
        assert_eq!(parse_optional_number::<f64>("risk", "1.5").unwrap(), Some(1.5));
    }
}
