//! Alibaba Cloud RPC request execution.

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;

use super::types::AliyunErrorBody;
use super::{ALIDNS, ALIYUN_DNS_VERSION, AliyunProvider, EMPTY_BODY_SHA256, serialize_to_query_string};

impl AliyunProvider {
    /// Executes one RPC action; parameters travel in the query string.
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        action: &str,
        params: &B,
    ) -> Result<T> {
        let query_string = serialize_to_query_string(params)?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = uuid::Uuid::new_v4().to_string();
        let authorization = self.sign(action, &query_string, &timestamp, &nonce);

        let url = if query_string.is_empty() {
            format!("{}/", self.base_url)
        } else {
            format!("{}/?{query_string}", self.base_url)
        };

        let request = self
            .client
            .post(&url)
            .header("Host", &self.host)
            .header("x-acs-action", action)
            .header("x-acs-version", ALIYUN_DNS_VERSION)
            .header("x-acs-date", &timestamp)
            .header("x-acs-signature-nonce", &nonce)
            .header("x-acs-content-sha256", EMPTY_BODY_SHA256)
            .header("Authorization", authorization);

        let (status, response_text) =
            HttpUtils::execute_request(request, ALIDNS, "POST", action).await?;

        decode_response(action, status, &response_text)
    }
}

/// Turns an RPC response into `T` or the vendor error it carries.
fn decode_response<T: DeserializeOwned>(action: &str, status: u16, body: &str) -> Result<T> {
    let value: serde_json::Value = match HttpUtils::parse_json(body, ALIDNS) {
        Ok(value) => value,
        Err(_) if status >= 400 => return Err(HttpUtils::status_error(ALIDNS, status, body)),
        Err(e) => return Err(e),
    };

    if value.get("Code").is_some_and(serde_json::Value::is_string) {
        let err: AliyunErrorBody = serde_json::from_value(value).map_err(|e| {
            ProviderError::ParseError {
                provider: ALIDNS.to_string(),
                detail: e.to_string(),
            }
        })?;
        log::error!("[{ALIDNS}] {action} failed: {} - {}", err.code, err.message);
        return Err(ProviderError::Api {
            provider: ALIDNS.to_string(),
            raw_code: err.code,
            raw_message: err.message,
            request_id: err.request_id,
        });
    }

    if status >= 400 {
        return Err(HttpUtils::status_error(ALIDNS, status, body));
    }

    serde_json::from_value(value).map_err(|e| ProviderError::ParseError {
        provider: ALIDNS.to_string(),
        detail: e.to_string(),
    })
}
