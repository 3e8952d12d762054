//! The relay: one prompt in, one line out, never on the caller's context.

use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::credentials::{CredentialStore, Credentials};
use crate::error::{RelayError, MIN_API_KEY_LEN};
use crate::format::{markdown_to_display, AI_TAG, ERROR_TAG};
use crate::gemini::{extract_reply, GenerateRequest};
use crate::session::SessionHandle;

/// Mediates between a session's prompt and the remote model's reply.
///
/// Holds the shared HTTP client (connection pool + timeout) and the
/// hot-reloadable credential store. Cloning is cheap; every clone talks to
/// the same pool and the same credentials.
#[derive(Clone)]
pub struct Relay {
    http: Client,
    credentials: Arc<CredentialStore>,
    generate_url_prefix: String,
}

impl Relay {
    pub fn new(http: Client, credentials: Arc<CredentialStore>, config: &Config) -> Self {
        let base = config.api_base.trim_end_matches('/');
        Self {
            http,
            credentials,
            generate_url_prefix: format!(
                "{base}/v1beta/models/{model}:generateContent?key=",
                model = config.model
            ),
        }
    }

    /// Forward `user_message` to Gemini and deliver the reply (or an error
    /// line) to `session`. Returns immediately; all network work happens on
    /// a spawned worker task.
    ///
    /// Exactly one line reaches the session per call, success or failure.
    /// Credentials are snapshotted here, so a reload that lands mid-flight
    /// never affects this request.
    pub fn dispatch(&self, session: SessionHandle, user_message: String) {
        let relay = self.clone();
        let credentials = self.credentials.current();

        tokio::spawn(async move {
            let line = match relay.generate(&credentials, &user_message).await {
                Ok(reply) => format!("{AI_TAG}{}", markdown_to_display(&reply)),
                Err(err) => {
                    err.log();
                    format!("{ERROR_TAG}{}", err.user_message())
                }
            };
            session.deliver(line);
        });
    }

    /// The worker-side request/response round-trip. Every failure mode maps
    /// to a [`RelayError`]; nothing escapes the task boundary above.
    async fn generate(
        &self,
        credentials: &Credentials,
        user_message: &str,
    ) -> Result<String, RelayError> {
        if credentials.api_key.len() < MIN_API_KEY_LEN {
            return Err(RelayError::Configuration);
        }

        let payload = GenerateRequest::new(&credentials.system_prompt, user_message);

        tracing::debug!(chars = user_message.len(), "Sending prompt to Gemini");

        let response = self
            .http
            .post(format!("{}{}", self.generate_url_prefix, credentials.api_key))
            .json(&payload)
            .send()
            .await?;

        // Capture the full body for both branches: the success path parses
        // it, the failure path logs it for operator diagnosis.
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RelayError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let reply = extract_reply(&body)?;
        tracing::info!(chars = reply.len(), "Gemini reply received");
        Ok(reply)
    }
}
