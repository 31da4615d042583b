use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Credentials, Domain, Record, RecordStatus};

/// Uniform DNS provider contract.
///
/// An instance is bound to one credential pair at construction and is
/// immutable afterwards, so a handle can be shared freely across tasks.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Registry name of the provider, e.g. `alidns`.
    fn id(&self) -> &'static str;

    /// All zones visible to the credentials.
    ///
    /// Pages are fetched sequentially until the vendor-reported total is reached.
    async fn list_domains(&self) -> Result<Vec<Domain>>;

    /// All records of `domain`, without the apex NS record.
    ///
    /// Any failing page fails the whole call; earlier pages are discarded.
    async fn list_records(&self, domain: &str) -> Result<Vec<Record>>;

    /// Creates `record` in `domain`.
    ///
    /// The host name is normalized and TTLs at or below 600s are not forwarded.
    async fn create_record(&self, domain: &Domain, record: &Record) -> Result<()>;

    /// Deletes a record by its vendor id.
    async fn delete_record(&self, domain: &str, record_id: &str) -> Result<()>;

    /// Replaces the record identified by `record.id`, status included.
    async fn modify_record(&self, domain: &str, record: &Record) -> Result<()>;

    /// Enables or disables a record without touching its other fields.
    async fn set_record_status(
        &self,
        domain: &str,
        record_id: &str,
        status: RecordStatus,
    ) -> Result<()>;
}

/// Builds provider instances bound to a credential pair.
pub trait ProviderFactory: Send + Sync {
    fn create(&self, credentials: Credentials) -> Result<Arc<dyn DnsProvider>>;
}

impl<F> ProviderFactory for F
where
    F: Fn(Credentials) -> Result<Arc<dyn DnsProvider>> + Send + Sync,
{
    fn create(&self, credentials: Credentials) -> Result<Arc<dyn DnsProvider>> {
        self(credentials)
    }
}
