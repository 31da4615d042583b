use serde::{Deserialize, Serialize};

/// Error returned by every [`DnsProvider`](crate::DnsProvider) operation.
///
/// Each variant carries the `provider` that produced it. Vendor failures are
/// passed through as [`Api`](Self::Api) with the code and message exactly as the
/// vendor returned them; nothing is classified, translated or retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The request never produced a response (DNS failure, connection refused, TLS).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The request exceeded the configured deadline.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The vendor answered with a non-success HTTP status and no structured error body.
    HttpStatus {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The vendor API rejected the call.
    Api {
        /// Provider that produced the error.
        provider: String,
        /// Vendor error code, e.g. `InvalidAccessKeyId.NotFound`.
        raw_code: String,
        /// Vendor error message.
        raw_message: String,
        /// Vendor request id, when the response carried one.
        request_id: Option<String>,
    },

    /// A parameter was rejected before any request was sent.
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the offending parameter.
        param: String,
        /// Why it was rejected.
        detail: String,
    },

    /// The vendor response could not be decoded.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The request payload could not be encoded.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },
}

impl ProviderError {
    /// Name of the provider that produced this error.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::Api { provider, .. }
            | Self::InvalidParameter { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::SerializationError { provider, .. } => provider,
        }
    }

    /// Vendor error code for [`Api`](Self::Api) errors.
    #[must_use]
    pub fn raw_code(&self) -> Option<&str> {
        match self {
            Self::Api { raw_code, .. } => Some(raw_code),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                provider,
                status,
                body,
            } => {
                write!(f, "[{provider}] HTTP {status}: {body}")
            }
            Self::Api {
                provider,
                raw_code,
                raw_message,
                request_id,
            } => {
                if let Some(id) = request_id {
                    write!(f, "[{provider}] {raw_code}: {raw_message} (request {id})")
                } else {
                    write!(f, "[{provider}] {raw_code}: {raw_message}")
                }
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Error returned by [`ProviderRegistry`](crate::ProviderRegistry).
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    /// No adapter is registered under the requested name.
    #[error("dns: unknown provider '{0}'")]
    ProviderNotFound(String),

    /// An adapter is already registered under this name.
    #[error("dns: cannot register provider '{0}' twice")]
    DuplicateProvider(String),

    /// The adapter could not be constructed for the supplied credentials.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
