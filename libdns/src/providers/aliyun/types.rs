//! Alibaba Cloud DNS request/response shapes and query-string encoding.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::types::{Record, RecordStatus, forwarded_ttl, normalize_host};

use super::ALIDNS;

// ============ RFC3986 encoding ============

/// Percent-encodes everything outside the RFC3986 unreserved set.
pub fn url_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(char::from(byte));
            }
            _ => {
                let _ = write!(result, "%{byte:02X}");
            }
        }
    }
    result
}

/// Flattens nested objects and arrays into `a.b` / `a.1` keys.
fn flatten_value(prefix: &str, value: &serde_json::Value, out: &mut BTreeMap<String, String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten_value(&key, v, out);
            }
        }
        serde_json::Value::Array(arr) => {
            for (i, v) in arr.iter().enumerate() {
                flatten_value(&format!("{prefix}.{}", i + 1), v, out);
            }
        }
        serde_json::Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        serde_json::Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        serde_json::Value::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        serde_json::Value::Null => {}
    }
}

/// Serializes request parameters into a sorted, encoded query string.
pub fn serialize_to_query_string<T: Serialize>(params: &T) -> Result<String> {
    let value = serde_json::to_value(params).map_err(|e| ProviderError::SerializationError {
        provider: ALIDNS.to_string(),
        detail: e.to_string(),
    })?;

    let mut flat = BTreeMap::new();
    flatten_value("", &value, &mut flat);

    Ok(flat
        .iter()
        .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
        .collect::<Vec<_>>()
        .join("&"))
}

// ============ Requests ============

#[derive(Debug, Serialize)]
pub struct DescribeDomainsRequest {
    #[serde(rename = "PageNumber")]
    pub page_number: u32,
    #[serde(rename = "PageSize")]
    pub page_size: u32,
}

#[derive(Debug, Serialize)]
pub struct DescribeDomainRecordsRequest {
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    #[serde(rename = "PageNumber")]
    pub page_number: u32,
    #[serde(rename = "PageSize")]
    pub page_size: u32,
}

#[derive(Debug, Serialize)]
pub struct AddDomainRecordRequest {
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl AddDomainRecordRequest {
    pub fn new(domain_name: &str, record: &Record) -> Self {
        Self {
            domain_name: domain_name.to_string(),
            rr: normalize_host(&record.name),
            record_type: record.record_type.clone(),
            value: record.value.clone(),
            ttl: forwarded_ttl(record.ttl),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateDomainRecordRequest {
    #[serde(rename = "RecordId")]
    pub record_id: String,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl UpdateDomainRecordRequest {
    pub fn new(record: &Record) -> Self {
        Self {
            record_id: record.id.clone(),
            rr: normalize_host(&record.name),
            record_type: record.record_type.clone(),
            value: record.value.clone(),
            ttl: forwarded_ttl(record.ttl),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteDomainRecordRequest {
    #[serde(rename = "RecordId")]
    pub record_id: String,
}

#[derive(Debug, Serialize)]
pub struct SetDomainRecordStatusRequest {
    #[serde(rename = "RecordId")]
    pub record_id: String,
    #[serde(rename = "Status")]
    pub status: RecordStatus,
}

// ============ Responses ============

/// Error envelope returned with a `Code` field.
#[derive(Debug, Deserialize)]
pub struct AliyunErrorBody {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message", default)]
    pub message: String,
    #[serde(rename = "RequestId")]
    pub request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DescribeDomainsResponse {
    #[serde(rename = "Domains")]
    pub domains: Option<DomainsWrapper>,
    #[serde(rename = "TotalCount")]
    pub total_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DomainsWrapper {
    #[serde(rename = "Domain")]
    pub domain: Option<Vec<AliyunDomain>>,
}

#[derive(Debug, Deserialize)]
pub struct AliyunDomain {
    #[serde(rename = "DomainName")]
    pub domain_name: String,
}

#[derive(Debug, Deserialize)]
pub struct DescribeDomainRecordsResponse {
    #[serde(rename = "DomainRecords")]
    pub domain_records: Option<DomainRecordsWrapper>,
    #[serde(rename = "TotalCount")]
    pub total_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DomainRecordsWrapper {
    #[serde(rename = "Record")]
    pub record: Option<Vec<AliyunRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct AliyunRecord {
    #[serde(rename = "RecordId")]
    pub record_id: String,
    #[serde(rename = "RR")]
    pub rr: String,
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

impl From<AliyunRecord> for Record {
    fn from(r: AliyunRecord) -> Self {
        Self {
            id: r.record_id,
            value: r.value,
            name: r.rr,
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
pub struct AddDomainRecordResponse {
    #[serde(rename = "RecordId")]
    pub record_id: String,
}

/// Body of calls that only acknowledge (`UpdateDomainRecord`, `DeleteDomainRecord`, ...).
#[derive(Debug, Deserialize)]
pub struct AckResponse {
    #[serde(rename = "RequestId")]
    pub request_id: Option<String>,
}
