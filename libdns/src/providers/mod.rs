//! DNS provider adapters

#[cfg(any(feature = "alidns", feature = "dnspod"))]
pub(crate) mod common;

#[cfg(feature = "alidns")]
mod aliyun;
#[cfg(feature = "dnspod")]
mod dnspod;

#[cfg(feature = "alidns")]
pub use aliyun::{ALIDNS, AliyunProvider, AliyunProviderBuilder};
#[cfg(feature = "dnspod")]
pub use dnspod::{DNSPOD, DnspodProvider, DnspodProviderBuilder};
