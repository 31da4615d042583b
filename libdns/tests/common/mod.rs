//! Shared helpers for the live-API tests.

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use libdns::{Credentials, DnsProvider, Domain, Record, RecordStatus, acquire};

/// Returns early when any of the named env vars is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: {} is not set", $var);
                return;
            }
        )+
    };
}

/// Unique record name, so concurrent runs never collide.
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// A TXT record ready for `create_record`.
pub fn test_txt_record(name: &str, value: &str) -> Record {
    Record {
        name: name.to_string(),
        record_type: "TXT".to_string(),
        value: value.to_string(),
        ttl: 600,
        status: RecordStatus::Enable,
        ..Record::default()
    }
}

/// A provider bound to live credentials plus the zone the tests may touch.
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub domain: Domain,
}

impl TestContext {
    fn from_env(provider: &str, key_var: &str, secret_var: &str) -> Option<Self> {
        let key = env::var(key_var).ok()?;
        let secret = env::var(secret_var).ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let provider = acquire(provider, Credentials::new(key, secret)).ok()?;

        Some(Self {
            provider,
            domain: Domain::new(domain),
        })
    }

    pub fn alidns() -> Option<Self> {
        Self::from_env("alidns", "ALIYUN_ACCESS_KEY_ID", "ALIYUN_ACCESS_KEY_SECRET")
    }

    pub fn dnspod() -> Option<Self> {
        Self::from_env("dnspod", "DNSPOD_SECRET_ID", "DNSPOD_SECRET_KEY")
    }

    /// Looks up a record by host name in the test zone.
    pub async fn find_record(&self, name: &str) -> Option<Record> {
        self.provider
            .list_records(&self.domain.name)
            .await
            .ok()?
            .into_iter()
            .find(|r| r.name == name)
    }

    /// Deletes every record left behind by earlier runs.
    pub async fn cleanup_all_test_records(&self) {
        if let Ok(records) = self.provider.list_records(&self.domain.name).await {
            for record in records {
                if record.name.starts_with("_test-") {
                    let _ = self
                        .provider
                        .delete_record(&self.domain.name, &record.id)
                        .await;
                }
            }
        }
    }
}
