//! # libdns
//!
//! A uniform interface for managing DNS records across hosting providers.
//!
//! Callers pick a provider by name, hand over a credential pair and get back a
//! [`DnsProvider`] that speaks the same contract regardless of the vendor
//! behind it.
//!
//! ## Supported Providers
//!
//! | Provider | Registry name | Feature Flag | Auth Method |
//! |----------|---------------|-------------|-------------|
//! | [Aliyun DNS](https://www.aliyun.com/product/dns) | `alidns` | `alidns` | ACS3-HMAC-SHA256 |
//! | [DNSPod (Tencent Cloud)](https://www.dnspod.cn/) | `dnspod` | `dnspod` | TC3-HMAC-SHA256 |
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)*: enable every adapter listed above.
//! - **`alidns`**, **`dnspod`**: enable a single adapter.
//! - **`native-tls`** *(default)* or **`rustls`**: TLS backend for `reqwest`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use libdns::{Credentials, Domain, Record, RecordStatus, acquire};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dns = acquire("dnspod", Credentials::new("secret-id", "secret-key"))?;
//!
//!     for domain in dns.list_domains().await? {
//!         println!("{}", domain.name);
//!     }
//!
//!     let record = Record {
//!         name: "www".to_string(),
//!         record_type: "A".to_string(),
//!         value: "192.0.2.1".to_string(),
//!         ttl: 600,
//!         status: RecordStatus::Enable,
//!         ..Record::default()
//!     };
//!     dns.create_record(&Domain::new("example.com"), &record).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Adapters
//!
//! Adapters are plain [`ProviderFactory`] values, so a [`ProviderRegistry`] can
//! hold vendors outside this crate next to the built-in ones.
//!
//! ## Error Handling
//!
//! Adapter operations return [`Result<T, ProviderError>`](ProviderError).
//! Vendor failures surface as [`ProviderError::Api`] with the vendor's own code
//! and message; nothing is retried or reinterpreted. Registry lookups return
//! [`RegistryError`].

mod error;
mod http_client;
mod pagination;
mod providers;
mod registry;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, RegistryError, Result};

pub use registry::{ProviderRegistry, acquire};

pub use traits::{DnsProvider, ProviderFactory};

pub use types::{
    APEX_HOST, Credentials, Domain, Record, RecordStatus, STATUS_DISABLE, STATUS_ENABLE,
    TTL_FLOOR, forwarded_ttl, normalize_host,
};

#[cfg(feature = "alidns")]
pub use providers::{ALIDNS, AliyunProvider, AliyunProviderBuilder};

#[cfg(feature = "dnspod")]
pub use providers::{DNSPOD, DnspodProvider, DnspodProviderBuilder};
