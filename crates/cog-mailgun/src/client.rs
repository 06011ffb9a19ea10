//! Mailgun API client.
//!
//! [`MailgunClient`] is the seam between steps and the network: steps
//! hold an `Arc<dyn MailgunClient>`, production wires in
//! [`HttpMailgunClient`], and tests substitute a mock. The client covers
//! the two reads the Cog needs: the stored-events listing for an inbox
//! and the stored message behind a storage URL.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::config::MailgunConfig;
use crate::models::{EmailMessage, Inbox};

/// Errors produced by Mailgun API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or the transport failed mid-flight.
    #[error("mailgun request failed: {0}")]
    Request(String),

    /// Response body could not be decoded.
    #[error("mailgun response decode failed: {0}")]
    Decode(String),

    /// Client configuration was invalid.
    #[error("mailgun client config invalid: {0}")]
    Config(String),
}

/// Read access to a Mailgun account's stored mail.
#[async_trait]
pub trait MailgunClient: Send + Sync {
    /// The authenticated email domain.
    fn domain(&self) -> &str;

    /// Fetch the stored-message listing for an inbox address.
    ///
    /// `Ok(None)` means Mailgun returned nothing for the address; an
    /// upstream failure body still returns `Ok(Some)` with the inbox's
    /// `message` set, so callers can surface it.
    async fn inbox(&self, email: &str) -> Result<Option<Inbox>, ClientError>;

    /// Fetch a stored message by the storage URL from an inbox item.
    ///
    /// `Ok(None)` means the message is gone (storage URLs expire).
    async fn message_by_storage_url(
        &self,
        url: &str,
    ) -> Result<Option<EmailMessage>, ClientError>;
}

/// HTTP client for the Mailgun API.
///
/// Wraps a [`reqwest::Client`] and the account configuration. The base
/// URL comes from [`MailgunConfig::api_base`] and can be overridden for
/// testing. Debug output redacts the API key.
#[derive(Debug)]
pub struct HttpMailgunClient {
    /// Shared HTTP client.
    http: Client,
    /// Account configuration from the host's auth record.
    config: MailgunConfig,
}

impl HttpMailgunClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MailgunConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Build a client from the raw auth record the host supplies.
    pub fn from_auth(auth: &serde_json::Value) -> Result<Self, ClientError> {
        let config: MailgunConfig = serde_json::from_value(auth.clone())
            .map_err(|e| ClientError::Config(format!("invalid auth record: {e}")))?;

        // Validate required fields.
        if config.api_key.is_empty() {
            return Err(ClientError::Config("apiKey is required".into()));
        }
        if config.domain.is_empty() {
            return Err(ClientError::Config("domain is required".into()));
        }

        Ok(Self::new(config))
    }

    /// Return the base URL used for API requests.
    pub fn api_base(&self) -> &str {
        &self.config.api_base
    }
}

#[async_trait]
impl MailgunClient for HttpMailgunClient {
    fn domain(&self) -> &str {
        &self.config.domain
    }

    async fn inbox(&self, email: &str) -> Result<Option<Inbox>, ClientError> {
        let url = format!("{}/{}/events", self.config.api_base, self.config.domain);

        debug!(email = %email, "fetching inbox listing");

        let (user, key) = self.config.api_key.basic_auth();
        let resp = self
            .http
            .get(&url)
            .basic_auth(user, Some(key))
            .query(&[("event", "stored"), ("recipient", email)])
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let body = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        if body.is_empty() {
            return Ok(None);
        }

        // Mailgun reports failures as a JSON `message` body under an error
        // status, so the body is parsed regardless of status.
        let inbox: Inbox =
            serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(Some(inbox))
    }

    async fn message_by_storage_url(
        &self,
        url: &str,
    ) -> Result<Option<EmailMessage>, ClientError> {
        debug!(url = %url, "fetching stored message");

        let (user, key) = self.config.api_key.basic_auth();
        let resp = self
            .http
            .get(url)
            .basic_auth(user, Some(key))
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        // Storage URLs expire; a non-success status means the message is
        // gone, not that the call failed.
        if !resp.status().is_success() {
            return Ok(None);
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        if body.is_empty() {
            return Ok(None);
        }

        let message: EmailMessage =
            serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(Some(message))
    }
}
