//! Tencent Cloud `DNSPod` adapter.

mod http;
mod provider;
mod sign;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, create_http_client};
use crate::types::Credentials;

/// Registry name of the adapter.
pub const DNSPOD: &str = "dnspod";

pub(crate) const DNSPOD_API_HOST: &str = "dnspod.tencentcloudapi.com";
pub(crate) const DNSPOD_SERVICE: &str = "dnspod";
pub(crate) const DNSPOD_VERSION: &str = "2021-03-23";
/// Largest `Limit` the list APIs accept.
pub(crate) const MAX_PAGE_SIZE: u32 = 3000;
/// Record line every record is created on ("default").
pub(crate) const DEFAULT_RECORD_LINE: &str = "默认";

/// Tencent Cloud `DNSPod` provider, signed with TC3-HMAC-SHA256.
pub struct DnspodProvider {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    /// Signed `Host` value.
    pub(crate) host: String,
    /// Where requests are sent, `https://{host}` unless overridden in tests.
    pub(crate) base_url: String,
}

/// Builder for [`DnspodProvider`].
pub struct DnspodProviderBuilder {
    credentials: Credentials,
    host: String,
    base_url: Option<String>,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl DnspodProviderBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            host: DNSPOD_API_HOST.to_string(),
            base_url: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// API host (default: `dnspod.tencentcloudapi.com`).
    pub fn endpoint(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }

    /// Sends requests to `url` instead of the endpoint host, keeping the signed host.
    #[cfg(test)]
    pub(crate) fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<DnspodProvider> {
        Ok(DnspodProvider {
            client: create_http_client(DNSPOD, self.connect_timeout, self.request_timeout)?,
            credentials: self.credentials,
            base_url: self
                .base_url
                .unwrap_or_else(|| format!("https://{}", self.host)),
            host: self.host,
        })
    }
}

impl DnspodProvider {
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> DnspodProviderBuilder {
        DnspodProviderBuilder::new(credentials)
    }
}
