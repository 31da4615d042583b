//! Tencent Cloud API request execution.

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::utils::log_sanitizer::truncate_for_log;

use super::types::TencentError;
use super::{DNSPOD, DNSPOD_VERSION, DnspodProvider};

impl DnspodProvider {
    /// Executes one API action with a JSON body.
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        action: &str,
        body: &B,
    ) -> Result<T> {
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: DNSPOD.to_string(),
                detail: e.to_string(),
            })?;

        log::debug!("{}", request_log_line(action, &payload));

        let timestamp = Utc::now().timestamp();
        let authorization = self.sign(action, &payload, timestamp);

        let url = format!("{}/", self.base_url);
        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json; charset=utf-8")
            .header("Host", &self.host)
            .header("X-TC-Action", action)
            .header("X-TC-Version", DNSPOD_VERSION)
            .header("X-TC-Timestamp", timestamp.to_string())
            .header("Authorization", authorization)
            .body(payload);

        let (status, response_text) =
            HttpUtils::execute_request(request, DNSPOD, "POST", action).await?;

        decode_response(action, status, &response_text)
    }
}

/// Debug line for an outgoing call; record values can be long or sensitive.
fn request_log_line(action: &str, payload: &str) -> String {
    format!("[{DNSPOD}] {action} body: {}", truncate_for_log(payload))
}

/// Unwraps the `{"Response": {...}}` envelope into `T` or its `Error`.
fn decode_response<T: DeserializeOwned>(action: &str, status: u16, body: &str) -> Result<T> {
    let mut envelope: serde_json::Value = match HttpUtils::parse_json(body, DNSPOD) {
        Ok(value) => value,
        Err(_) if status >= 400 => return Err(HttpUtils::status_error(DNSPOD, status, body)),
        Err(e) => return Err(e),
    };

    let Some(response) = envelope.get_mut("Response").map(serde_json::Value::take) else {
        if status >= 400 {
            return Err(HttpUtils::status_error(DNSPOD, status, body));
        }
        return Err(ProviderError::ParseError {
            provider: DNSPOD.to_string(),
            detail: "Missing Response in body".to_string(),
        });
    };

    if let Some(error) = response.get("Error") {
        let error: TencentError =
            serde_json::from_value(error.clone()).map_err(|e| ProviderError::ParseError {
                provider: DNSPOD.to_string(),
                detail: e.to_string(),
            })?;
        let request_id = response
            .get("RequestId")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        log::error!("[{DNSPOD}] {action} failed: {} - {}", error.code, error.message);
        return Err(ProviderError::Api {
            provider: DNSPOD.to_string(),
            raw_code: error.code,
            raw_message: error.message,
            request_id,
        });
    }

    if status >= 400 {
        return Err(HttpUtils::status_error(DNSPOD, status, body));
    }

    serde_json::from_value(response).map_err(|e| ProviderError::ParseError {
        provider: DNSPOD.to_string(),
        detail: e.to_string(),
    })
}
