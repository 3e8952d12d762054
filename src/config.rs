use clap::Parser;

use crate::credentials::{Credentials, DEFAULT_SYSTEM_PROMPT};
use crate::error::MIN_API_KEY_LEN;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Parser, Debug, Clone)]
#[command(
    name    = "prat-bridge",
    about   = "Gemini chat relay bridge for game servers",
    version
)]
pub struct Config {
    /// Gemini API key used for generateContent calls.
    /// Can also be set via the GEMINI_API_KEY environment variable.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, default_value = "")]
    pub gemini_api_key: String,

    /// System instruction sent with every prompt.
    #[arg(long, env = "PRAT_SYSTEM_PROMPT", default_value = DEFAULT_SYSTEM_PROMPT)]
    pub system_prompt: String,

    /// Gemini model id the relay talks to.
    #[arg(long, env = "PRAT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the generative-language API. Overridable for testing
    /// against a local mock server.
    #[arg(long, env = "PRAT_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Upper bound on a single Gemini call, in seconds. The upstream plugin
    /// had no timeout at all; an unresponsive provider would have pinned a
    /// worker forever.
    #[arg(long, env = "PRAT_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Config {
    /// Startup sanity check. A missing key is allowed to boot (the relay
    /// reports it per request, and a reload can fix it live), but an
    /// obviously broken base URL or timeout is not.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("PRAT_TIMEOUT_SECS must be at least 1 second");
        }
        if !self.api_base.starts_with("http") {
            anyhow::bail!("PRAT_API_BASE must be an http(s) URL, got {:?}", self.api_base);
        }
        if self.gemini_api_key.trim().len() < MIN_API_KEY_LEN {
            tracing::warn!(
                "GEMINI_API_KEY is missing or implausibly short; \
                 set it in your shell or in .env, then run /aichatreload"
            );
        }
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.gemini_api_key, &self.system_prompt)
    }

    /// Re-read the credential pair from the environment, refreshing `.env`
    /// first so edits to the file are picked up without a restart.
    pub fn reload_credentials_from_env(&self) -> Credentials {
        let _ = dotenvy::dotenv_override();
        let api_key =
            std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| self.gemini_api_key.clone());
        let system_prompt =
            std::env::var("PRAT_SYSTEM_PROMPT").unwrap_or_else(|_| self.system_prompt.clone());
        Credentials::new(api_key, system_prompt)
    }
}
