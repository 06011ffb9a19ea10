//! Credential handling for the Mailgun private API key.
//!
//! Mailgun authenticates every request with HTTP basic auth: the fixed
//! username `api` paired with the account's private key as the password.
//! [`ApiKey`] holds that key and keeps it out of Debug output and
//! serialized configuration; the one read path is [`ApiKey::basic_auth`],
//! the credential pair the HTTP client attaches to each request.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The account's private Mailgun API key.
///
/// Deserializes from the plain string in the host's auth record, but
/// serializes as an empty string and debug-prints a redaction marker,
/// so the key never travels back out of the process.
#[derive(Clone, Default)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The `(username, password)` pair for Mailgun's basic-auth scheme.
    pub fn basic_auth(&self) -> (&'static str, &str) {
        ("api", &self.0)
    }

    /// True when the auth record carried no key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("ApiKey(unset)")
        } else {
            f.write_str("ApiKey([REDACTED])")
        }
    }
}

impl Serialize for ApiKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Serialized config carries the field, never the key.
        serializer.serialize_str("")
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ApiKey)
    }
}
