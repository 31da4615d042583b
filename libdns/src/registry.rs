//! Name-based provider registry.
//!
//! Maps a provider name to a [`ProviderFactory`]. Acquiring a provider builds a
//! fresh adapter bound to the caller's credentials, so handles for different
//! tenants never share state.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use crate::error::{self, RegistryError};
use crate::traits::{DnsProvider, ProviderFactory};
use crate::types::Credentials;

#[cfg(feature = "alidns")]
use crate::providers::{ALIDNS, AliyunProvider};
#[cfg(feature = "dnspod")]
use crate::providers::{DNSPOD, DnspodProvider};

/// Table of provider factories, keyed by name.
#[derive(Default)]
pub struct ProviderRegistry {
    factories: BTreeMap<String, Box<dyn ProviderFactory>>,
}

impl ProviderRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every adapter enabled through cargo features.
    pub fn with_builtin() -> Result<Self, RegistryError> {
        #[allow(unused_mut)]
        let mut registry = Self::new();

        #[cfg(feature = "alidns")]
        registry.register(ALIDNS, |credentials: Credentials| -> error::Result<Arc<dyn DnsProvider>> {
            Ok(Arc::new(AliyunProvider::new(credentials)?))
        })?;

        #[cfg(feature = "dnspod")]
        registry.register(DNSPOD, |credentials: Credentials| -> error::Result<Arc<dyn DnsProvider>> {
            Ok(Arc::new(DnspodProvider::new(credentials)?))
        })?;

        Ok(registry)
    }

    /// Adds `factory` under `name`.
    ///
    /// A name can only be registered once; a second attempt is rejected and
    /// the first registration stays in effect.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl ProviderFactory + 'static,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            log::error!("provider '{name}' registered twice");
            return Err(RegistryError::DuplicateProvider(name));
        }
        log::debug!("registered provider '{name}'");
        self.factories.insert(name, Box::new(factory));
        Ok(())
    }

    /// Builds the provider registered under `name`, bound to `credentials`.
    pub fn acquire(
        &self,
        name: &str,
        credentials: Credentials,
    ) -> Result<Arc<dyn DnsProvider>, RegistryError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::ProviderNotFound(name.to_string()))?;
        Ok(factory.create(credentials)?)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

/// Acquires a built-in provider by name.
///
/// ```rust,no_run
/// use libdns::{Credentials, acquire};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let dns = acquire("alidns", Credentials::new("key", "secret"))?;
/// for domain in dns.list_domains().await? {
///     println!("{}", domain.name);
/// }
/// # Ok(())
/// # }
/// ```
pub fn acquire(name: &str, credentials: Credentials) -> Result<Arc<dyn DnsProvider>, RegistryError> {
    builtin()?.acquire(name, credentials)
}

/// Process-wide built-in registry, built on first use.
static BUILTIN: LazyLock<Result<ProviderRegistry, RegistryError>> =
    LazyLock::new(ProviderRegistry::with_builtin);

fn builtin() -> Result<&'static ProviderRegistry, RegistryError> {
    BUILTIN.as_ref().map_err(Clone::clone)
}
