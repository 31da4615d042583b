//! Alibaba Cloud DNS (`alidns`) adapter.

mod http;
mod provider;
mod sign;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, create_http_client};
use crate::types::Credentials;

pub(crate) use types::serialize_to_query_string;

/// Registry name of the adapter.
pub const ALIDNS: &str = "alidns";

pub(crate) const ALIYUN_DNS_HOST: &str = "alidns.cn-hangzhou.aliyuncs.com";
pub(crate) const ALIYUN_DNS_VERSION: &str = "2015-01-09";
/// SHA256 of an empty body.
pub(crate) const EMPTY_BODY_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
/// Largest page the list APIs accept.
pub(crate) const MAX_PAGE_SIZE: u32 = 100;

/// Alibaba Cloud DNS provider.
///
/// Requests are RPC style (parameters in the query string) and signed with
/// ACS3-HMAC-SHA256.
///
/// ```rust,no_run
/// use libdns::{AliyunProvider, Credentials};
///
/// let provider = AliyunProvider::new(Credentials::new("access-key-id", "access-key-secret"))?;
/// # Ok::<(), libdns::ProviderError>(())
/// ```
pub struct AliyunProvider {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    /// Signed `Host` value.
    pub(crate) host: String,
    /// Where requests are sent, `https://{host}` unless overridden in tests.
    pub(crate) base_url: String,
}

/// Builder for [`AliyunProvider`].
pub struct AliyunProviderBuilder {
    credentials: Credentials,
    host: String,
    base_url: Option<String>,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl AliyunProviderBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            host: ALIYUN_DNS_HOST.to_string(),
            base_url: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// API host, e.g. `alidns.ap-southeast-1.aliyuncs.com` (default: Hangzhou).
    pub fn endpoint(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Connect and whole-request deadlines (default: 10s / 30s).
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

    pub fn build(self) -> Result<AliyunProvider> {
        Ok(AliyunProvider {
            client: create_http_client(ALIDNS, self.connect_timeout, self.request_timeout)?,
            credentials: self.credentials,
            base_url: self
                .base_url
                .unwrap_or_else(|| format!("https://{}", self.host)),
            host: self.host,
        })
    }
}

impl AliyunProvider {
    /// Creates a provider with the default endpoint and timeouts.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> AliyunProviderBuilder {
        AliyunProviderBuilder::new(credentials)
    }
}
