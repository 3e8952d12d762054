//! prat-bridge: a chat-to-Gemini relay for game servers.
//!
//! A session's prompt goes in, one formatted line comes back out, and the
//! host's session-facing context is never blocked: the HTTP round-trip runs
//! on a worker task and the finished line is re-marshaled through the
//! session's delivery queue.

pub mod config;
pub mod credentials;
pub mod error;
pub mod format;
pub mod gemini;
pub mod host;
pub mod relay;
pub mod session;

pub use config::Config;
pub use credentials::{CredentialStore, Credentials};
pub use error::RelayError;
pub use relay::Relay;
pub use session::{SessionHandle, SessionId};
