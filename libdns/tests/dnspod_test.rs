//! DNSPod live-API tests.
//!
//! ```bash
//! DNSPOD_SECRET_ID=xxx DNSPOD_SECRET_KEY=xxx TEST_DOMAIN=example.com \
//!     cargo test -p libdns --test dnspod_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{TestContext, generate_test_record_name, test_txt_record};
use libdns::{ProviderError, RecordStatus};

#[tokio::test]
#[ignore]
async fn test_dnspod_list_domains() {
    skip_if_no_credentials!("DNSPOD_SECRET_ID", "DNSPOD_SECRET_KEY", "TEST_DOMAIN");

    let ctx = TestContext::dnspod().expect("failed to build test context");
    let domains = ctx.provider.list_domains().await;
    assert!(domains.is_ok(), "list_domains failed: {domains:?}");

    let domains = domains.unwrap();
    assert!(
        domains.iter().any(|d| d.name == ctx.domain.name),
        "TEST_DOMAIN should be listed"
    );
    assert!(domains.iter().all(|d| d.provider_name.as_deref() == Some("dnspod")));
}

#[tokio::test]
#[ignore]
async fn test_dnspod_list_records_hides_apex_ns() {
    skip_if_no_credentials!("DNSPOD_SECRET_ID", "DNSPOD_SECRET_KEY", "TEST_DOMAIN");

    let ctx = TestContext::dnspod().expect("failed to build test context");
    let records = ctx.provider.list_records(&ctx.domain.name).await;
    assert!(records.is_ok(), "list_records failed: {records:?}");
    assert!(!records.unwrap().iter().any(|r| r.is_apex_ns()));
}

#[tokio::test]
#[ignore]
async fn test_dnspod_unknown_domain_is_api_error() {
    skip_if_no_credentials!("DNSPOD_SECRET_ID", "DNSPOD_SECRET_KEY", "TEST_DOMAIN");

    let ctx = TestContext::dnspod().expect("failed to build test context");
    let result = ctx
        .provider
        .list_records("no-such-zone-for-libdns-tests.invalid")
        .await;
    assert!(
        matches!(result, Err(ProviderError::Api { .. })),
        "expected a vendor error, got {result:?}"
    );
}

/// Removes records left behind by interrupted runs. Run by hand.
#[tokio::test]
#[ignore]
async fn test_dnspod_cleanup_test_records() {
    skip_if_no_credentials!("DNSPOD_SECRET_ID", "DNSPOD_SECRET_KEY", "TEST_DOMAIN");

    let ctx = TestContext::dnspod().expect("failed to build test context");
    ctx.cleanup_all_test_records().await;
}

#[tokio::test]
#[ignore]
async fn test_dnspod_record_lifecycle() {
    skip_if_no_credentials!("DNSPOD_SECRET_ID", "DNSPOD_SECRET_KEY", "TEST_DOMAIN");

    let ctx = TestContext::dnspod().expect("failed to build test context");
    let name = generate_test_record_name();

    // Create disabled so the status flag is exercised on create.
    let mut record = test_txt_record(&name, "libdns-create");
    record.status = RecordStatus::Disable;
    let created = ctx.provider.create_record(&ctx.domain, &record).await;
    assert!(created.is_ok(), "create_record failed: {created:?}");

    let found = ctx.find_record(&name).await.expect("created record should be listed");
    assert_eq!(found.value, "libdns-create");
    assert_eq!(found.status, RecordStatus::Disable);

    // Modify value and TTL.
    let mut update = found.clone();
    update.value = "libdns-update".to_string();
    update.ttl = 1200;
    update.status = RecordStatus::Enable;
    let modified = ctx.provider.modify_record(&ctx.domain.name, &update).await;
    assert!(modified.is_ok(), "modify_record failed: {modified:?}");

    let found = ctx.find_record(&name).await.expect("modified record should be listed");
    assert_eq!(found.value, "libdns-update");
    assert_eq!(found.ttl, 1200);
    assert_eq!(found.status, RecordStatus::Enable);

    // Toggle status only.
    let toggled = ctx
        .provider
        .set_record_status(&ctx.domain.name, &found.id, RecordStatus::Disable)
        .await;
    assert!(toggled.is_ok(), "set_record_status failed: {toggled:?}");
    let found = ctx.find_record(&name).await.expect("record should still be listed");
    assert_eq!(found.status, RecordStatus::Disable);

    let deleted = ctx.provider.delete_record(&ctx.domain.name, &found.id).await;
    assert!(deleted.is_ok(), "delete_record failed: {deleted:?}");
    assert!(ctx.find_record(&name).await.is_none(), "record should be gone");
}
