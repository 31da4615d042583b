//! Aliyun DNS live-API tests.
//!
//! ```bash
//! ALIYUN_ACCESS_KEY_ID=xxx ALIYUN_ACCESS_KEY_SECRET=xxx TEST_DOMAIN=example.com \
//!     cargo test -p libdns --test aliyun_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{TestContext, generate_test_record_name, test_txt_record};
use libdns::RecordStatus;

#[tokio::test]
#[ignore]
async fn test_alidns_list_domains() {
    skip_if_no_credentials!("ALIYUN_ACCESS_KEY_ID", "ALIYUN_ACCESS_KEY_SECRET", "TEST_DOMAIN");

    let ctx = TestContext::alidns().expect("failed to build test context");
    let domains = ctx.provider.list_domains().await;
    assert!(domains.is_ok(), "list_domains failed: {domains:?}");
    assert!(
        domains.unwrap().iter().any(|d| d.name == ctx.domain.name),
        "TEST_DOMAIN should be listed"
    );
}

#[tokio::test]
#[ignore]
async fn test_alidns_list_records_hides_apex_ns() {
    skip_if_no_credentials!("ALIYUN_ACCESS_KEY_ID", "ALIYUN_ACCESS_KEY_SECRET", "TEST_DOMAIN");

    let ctx = TestContext::alidns().expect("failed to build test context");
    let records = ctx.provider.list_records(&ctx.domain.name).await;
    assert!(records.is_ok(), "list_records failed: {records:?}");
    assert!(!records.unwrap().iter().any(|r| r.is_apex_ns()));
}

/// Removes records left behind by interrupted runs. Run by hand.
#[tokio::test]
#[ignore]
async fn test_alidns_cleanup_test_records() {
    skip_if_no_credentials!("ALIYUN_ACCESS_KEY_ID", "ALIYUN_ACCESS_KEY_SECRET", "TEST_DOMAIN");

    let ctx = TestContext::alidns().expect("failed to build test context");
    ctx.cleanup_all_test_records().await;
}

#[tokio::test]
#[ignore]
async fn test_alidns_record_lifecycle() {
    skip_if_no_credentials!("ALIYUN_ACCESS_KEY_ID", "ALIYUN_ACCESS_KEY_SECRET", "TEST_DOMAIN");

    let ctx = TestContext::alidns().expect("failed to build test context");
    let name = generate_test_record_name();

    let record = test_txt_record(&name, "libdns-create");
    let created = ctx.provider.create_record(&ctx.domain, &record).await;
    assert!(created.is_ok(), "create_record failed: {created:?}");

    let found = ctx.find_record(&name).await.expect("created record should be listed");
    assert_eq!(found.value, "libdns-create");
    assert_eq!(found.status, RecordStatus::Enable);

    let mut update = found.clone();
    update.value = "libdns-update".to_string();
    update.ttl = 1200;
    let modified = ctx.provider.modify_record(&ctx.domain.name, &update).await;
    assert!(modified.is_ok(), "modify_record failed: {modified:?}");

    let found = ctx.find_record(&name).await.expect("modified record should be listed");
    assert_eq!(found.value, "libdns-update");
    assert_eq!(found.ttl, 1200);

    // Unchanged content with a new status must still go through.
    let mut disable = found.clone();
    disable.status = RecordStatus::Disable;
    let modified = ctx.provider.modify_record(&ctx.domain.name, &disable).await;
    assert!(modified.is_ok(), "status-only modify failed: {modified:?}");
    let found = ctx.find_record(&name).await.expect("record should still be listed");
    assert_eq!(found.status, RecordStatus::Disable);

    let toggled = ctx
        .provider
        .set_record_status(&ctx.domain.name, &found.id, RecordStatus::Enable)
        .await;
    assert!(toggled.is_ok(), "set_record_status failed: {toggled:?}");
    let found = ctx.find_record(&name).await.expect("record should still be listed");
    assert_eq!(found.status, RecordStatus::Enable);

    let deleted = ctx.provider.delete_record(&ctx.domain.name, &found.id).await;
    assert!(deleted.is_ok(), "delete_record failed: {deleted:?}");
    assert!(ctx.find_record(&name).await.is_none(), "record should be gone");
}
