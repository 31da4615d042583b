//! Tencent Cloud `DNSPod` API shapes.

use serde::{Deserialize, Serialize};

use crate::types::{Record, RecordStatus, forwarded_ttl, normalize_host};

use super::DEFAULT_RECORD_LINE;

// ============ Envelope ============

/// Error payload nested inside `Response`.
#[derive(Debug, Deserialize)]
pub struct TencentError {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message", default)]
    pub message: String,
}

// ============ Requests ============

#[derive(Debug, Serialize)]
pub struct DescribeDomainListRequest {
    #[serde(rename = "Offset")]
    pub offset: u32,
    #[serde(rename = "Limit")]
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub struct DescribeRecordListRequest {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Offset")]
    pub offset: u32,
    #[serde(rename = "Limit")]
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub struct CreateRecordRequest {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "SubDomain")]
    pub sub_domain: String,
    #[serde(rename = "RecordType")]
    pub record_type: String,
    #[serde(rename = "RecordLine")]
    pub record_line: &'static str,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Only sent for disabled records; the API creates enabled records by default.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
}

impl CreateRecordRequest {
    pub fn new(domain: &str, record: &Record) -> Self {
        Self {
            domain: domain.to_string(),
            sub_domain: normalize_host(&record.name),
            record_type: record.record_type.clone(),
            record_line: DEFAULT_RECORD_LINE,
            value: record.value.clone(),
            ttl: forwarded_ttl(record.ttl),
            status: (record.status == RecordStatus::Disable).then_some(RecordStatus::Disable),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModifyRecordRequest {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "RecordId")]
    pub record_id: u64,
    #[serde(rename = "SubDomain")]
    pub sub_domain: String,
    #[serde(rename = "RecordType")]
    pub record_type: String,
    #[serde(rename = "RecordLine")]
    pub record_line: &'static str,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(rename = "Status")]
    pub status: RecordStatus,
}

impl ModifyRecordRequest {
    pub fn new(domain: &str, record_id: u64, record: &Record) -> Self {
        Self {
            domain: domain.to_string(),
            record_id,
            sub_domain: normalize_host(&record.name),
            record_type: record.record_type.clone(),
            record_line: DEFAULT_RECORD_LINE,
            value: record.value.clone(),
            ttl: forwarded_ttl(record.ttl),
            status: record.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteRecordRequest {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "RecordId")]
    pub record_id: u64,
}

#[derive(Debug, Serialize)]
pub struct ModifyRecordStatusRequest {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "RecordId")]
    pub record_id: u64,
    #[serde(rename = "Status")]
    pub status: RecordStatus,
}

// ============ Responses ============

#[derive(Debug, Deserialize)]
pub struct DomainListResponse {
    #[serde(rename = "DomainList")]
    pub domain_list: Option<Vec<DnspodDomain>>,
    #[serde(rename = "DomainCountInfo")]
    pub domain_count_info: Option<DomainCountInfo>,
}

#[derive(Debug, Deserialize)]
pub struct DomainCountInfo {
    #[serde(rename = "AllTotal")]
    pub all_total: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DnspodDomain {
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RecordListResponse {
    #[serde(rename = "RecordList")]
    pub record_list: Option<Vec<DnspodRecord>>,
    #[serde(rename = "RecordCountInfo")]
    pub record_count_info: Option<RecordCountInfo>,
}

#[derive(Debug, Deserialize)]
pub struct RecordCountInfo {
    #[serde(rename = "TotalCount")]
    pub total_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DnspodRecord {
    #[serde(rename = "RecordId")]
    pub record_id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "Weight")]
    pub weight: Option<u32>,
}

impl From<DnspodRecord> for Record {
    fn from(r: DnspodRecord) -> Self {
        Self {
            id: r.record_id.to_string(),
            value: r.value,
            name: r.name,
            record_type: r.record_type,
            status: r
                .status
                .as_deref()
                .map_or(RecordStatus::Enable, RecordStatus::from_vendor),
            ttl: r.ttl,
            weight: r.weight.unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordResponse {
    #[serde(rename = "RecordId")]
    pub record_id: u64,
}

/// Body of calls that only acknowledge.
#[derive(Debug, Deserialize)]
pub struct AckResponse {
    #[serde(rename = "RequestId")]
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, ttl: u32, status: RecordStatus) -> Record {
        Record {
            id: "42".to_string(),
            value: "192.0.2.1".to_string(),
            name: name.to_string(),
            record_type: "A".to_string(),
            status,
            ttl,
            weight: 0,
        }
    }

    #[test]
    fn create_request_omits_low_ttl_and_enabled_status() {
        let req = CreateRecordRequest::new("example.com", &record("www.", 600, RecordStatus::Enable));
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            json!({
                "Domain": "example.com",
                "SubDomain": "www",
                "RecordType": "A",
                "RecordLine": "默认",
                "Value": "192.0.2.1"
            })
        );
    }

    #[test]
    fn create_request_forwards_high_ttl_and_disable() {
        let req = CreateRecordRequest::new("example.com", &record("", 7200, RecordStatus::Disable));
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["SubDomain"], "@");
        assert_eq!(body["TTL"], 7200);
        assert_eq!(body["Status"], "DISABLE");
    }

    #[test]
    fn modify_request_always_sends_status() {
        let req = ModifyRecordRequest::new("example.com", 42, &record("api", 300, RecordStatus::Enable));
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["RecordId"], 42);
        assert_eq!(body["SubDomain"], "api");
        assert_eq!(body["Status"], "ENABLE");
        assert!(body.get("TTL").is_none());
    }

    #[test]
    fn record_list_maps_status_and_null_weight() {
        let resp: RecordListResponse = serde_json::from_value(json!({
            "RecordCountInfo": {"TotalCount": 2, "SubdomainCount": 2, "ListCount": 2},
            "RecordList": [
                {"RecordId": 1, "Name": "@", "Type": "NS", "Value": "f1g1ns1.dnspod.net.", "TTL": 86400, "Status": "ENABLE", "Weight": null, "Line": "默认"},
                {"RecordId": 2, "Name": "www", "Type": "A", "Value": "192.0.2.1", "TTL": 600, "Status": "DISABLE", "Weight": 10, "Line": "默认"}
            ],
            "RequestId": "r"
        }))
        .unwrap();

        let records: Vec<Record> = resp
            .record_list
            .unwrap_or_default()
            .into_iter()
            .map(Record::from)
            .collect();
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].weight, 0);
        assert!(records[0].is_apex_ns());
        assert_eq!(records[1].status, RecordStatus::Disable);
        assert_eq!(records[1].weight, 10);
    }

    #[test]
    fn domain_list_parses_total() {
        let resp: DomainListResponse = serde_json::from_value(json!({
            "DomainCountInfo": {"AllTotal": 3, "MineTotal": 3},
            "DomainList": [{"Name": "a.com", "DomainId": 1}, {"Name": "b.com", "DomainId": 2}],
            "RequestId": "r"
        }))
        .unwrap();
        assert_eq!(resp.domain_count_info.and_then(|c| c.all_total), Some(3));
        assert_eq!(resp.domain_list.map(|l| l.len()), Some(2));
    }
}
