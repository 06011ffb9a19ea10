//! Configuration for the Mailgun Cog.
//!
//! [`MailgunConfig`] is parsed from the authentication record the host
//! collects before running any step. Field names follow the wire form of
//! the auth record (`apiKey`, `domain`), declared in
//! [`MailgunConfig::auth_fields`].

use serde::{Deserialize, Serialize};

use cog_step::{FieldDefinition, FieldType};

use crate::secret::ApiKey;

/// Base URL for the Mailgun API.
const MAILGUN_API_BASE: &str = "https://api.mailgun.net/v3";

/// Configuration assembled from the host-supplied auth record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailgunConfig {
    /// Private Mailgun API key.
    #[serde(default)]
    pub api_key: ApiKey,

    /// Authenticated email domain. Steps refuse to check inboxes whose
    /// address falls outside this domain.
    #[serde(default)]
    pub domain: String,

    /// Base URL for API calls. Overridable for testing.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    MAILGUN_API_BASE.to_string()
}

impl Default for MailgunConfig {
    fn default() -> Self {
        Self {
            api_key: ApiKey::default(),
            domain: String::new(),
            api_base: default_api_base(),
        }
    }
}

impl MailgunConfig {
    /// Authentication fields the host collects for this Cog.
    pub fn auth_fields() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("apiKey", FieldType::String, "Mailgun API Key"),
            FieldDefinition::new(
                "domain",
                FieldType::String,
                "Email domain whose inboxes this Cog may check",
            ),
        ]
    }
}
