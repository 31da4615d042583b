use serde::{Deserialize, Serialize};

/// Host marker for the zone apex.
pub const APEX_HOST: &str = "@";

/// TTL values at or below this floor are left to the vendor default.
pub const TTL_FLOOR: u32 = 600;

/// Wire value of [`RecordStatus::Enable`].
pub const STATUS_ENABLE: &str = "ENABLE";

/// Wire value of [`RecordStatus::Disable`].
pub const STATUS_DISABLE: &str = "DISABLE";

// ============ Credentials ============

/// Access key pair used to sign vendor API calls.
///
/// The secret is never printed: the `Debug` impl redacts it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Access key id (Aliyun `AccessKeyId`, Tencent Cloud `SecretId`).
    pub key: String,
    /// Access key secret (Aliyun `AccessKeySecret`, Tencent Cloud `SecretKey`).
    pub secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

// ============ Domain ============

/// A DNS zone visible to a provider account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Zone name, e.g. `example.com`.
    pub name: String,
    /// Registry name of the provider that reported the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
}

impl Domain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider_name: None,
        }
    }
}

// ============ Record ============

/// Whether a record is served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    #[default]
    Enable,
    Disable,
}

impl RecordStatus {
    /// Vendor wire value (`ENABLE` / `DISABLE`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enable => STATUS_ENABLE,
            Self::Disable => STATUS_DISABLE,
        }
    }

    /// Parses a vendor status string. Anything other than `DISABLE` counts as enabled.
    #[must_use]
    pub fn from_vendor(status: &str) -> Self {
        if status.eq_ignore_ascii_case(STATUS_DISABLE) {
            Self::Disable
        } else {
            Self::Enable
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One DNS resource record as the vendor reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Vendor-assigned id. Empty for records that do not exist yet.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Record value (address, target, text, ...).
    pub value: String,
    /// Host part relative to the zone, `@` for the apex.
    pub name: String,
    /// Record type, e.g. `A`, `CNAME`, `TXT`.
    pub record_type: String,
    #[serde(default)]
    pub status: RecordStatus,
    /// TTL in seconds.
    #[serde(default)]
    pub ttl: u32,
    /// Weight for weighted round-robin, `0` when unused.
    #[serde(default)]
    pub weight: u32,
}

impl Record {
    /// `true` for the NS record the vendor keeps at the zone apex.
    #[must_use]
    pub fn is_apex_ns(&self) -> bool {
        is_apex_ns(&self.name, &self.record_type)
    }
}

/// `true` when `name`/`record_type` denote the zone-apex NS record.
pub(crate) fn is_apex_ns(name: &str, record_type: &str) -> bool {
    name == APEX_HOST && record_type.eq_ignore_ascii_case("NS")
}

/// Strips a trailing `.` from a host name; an empty result becomes [`APEX_HOST`].
pub fn normalize_host(name: &str) -> String {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() {
        APEX_HOST.to_string()
    } else {
        name.to_string()
    }
}

/// TTL to send to the vendor, `None` when the vendor default should apply.
#[must_use]
pub fn forwarded_ttl(ttl: u32) -> Option<u32> {
    (ttl > TTL_FLOOR).then_some(ttl)
}
