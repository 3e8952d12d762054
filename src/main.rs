use std::{sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prat_bridge::format::{ERROR_TAG, THINKING_LINE};
use prat_bridge::host::{self, AllowAll, Gatekeeper};
use prat_bridge::{Config, CredentialStore, Relay, SessionHandle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignored silently if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prat_bridge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    // One shared client: connection pool plus the bounded per-call timeout
    // the upstream plugin never had.
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let credentials = Arc::new(CredentialStore::new(config.credentials()));
    let relay = Relay::new(http_client, credentials.clone(), &config);
    let gate = AllowAll;

    // Single local session: replies land on stdout through the printer task,
    // the only place session output is touched.
    let (session, mut inbox) = SessionHandle::new(0);
    let printer = tokio::spawn(async move {
        while let Some(line) = inbox.recv().await {
            println!("{line}");
        }
    });

    tracing::info!(model = %config.model, "prat-bridge ready");
    println!("Commands: /aichat <message>, /aichatreload, /quit. Chat lines starting with \"!ai \" are relayed too.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == "/quit" {
            break;
        }

        if line == "/aichatreload" {
            if gate.can_reload(&session) {
                credentials.replace(config.reload_credentials_from_env());
                session.deliver("§aAI config reloaded!");
            } else {
                session.deliver(format!("{ERROR_TAG}You don't have permission."));
            }
            continue;
        }

        if line == "/aichat" {
            session.deliver(format!("{ERROR_TAG}Usage: /aichat <message>"));
            continue;
        }
        if let Some(rest) = line.strip_prefix("/aichat ") {
            let prompt = rest.trim();
            if prompt.is_empty() {
                session.deliver(format!("{ERROR_TAG}Usage: /aichat <message>"));
            } else {
                session.deliver(THINKING_LINE);
                relay.dispatch(session.clone(), prompt.to_string());
            }
            continue;
        }

        if let Some(prompt) = host::intercept(line) {
            if gate.can_use(&session) {
                session.deliver(THINKING_LINE);
                relay.dispatch(session.clone(), prompt.to_string());
            } else {
                session.deliver(format!("{ERROR_TAG}You do not have permission to use AI."));
            }
        }
        // Anything else is ordinary chat; not ours to handle.
    }

    tracing::info!("Shutting down");
    drop(session);
    printer.await.context("Printer task failed")?;
    Ok(())
}
