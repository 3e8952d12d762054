//! The narrow seam between the relay and whatever host it is embedded in:
//! chat interception and permission gating.

use crate::session::SessionHandle;

/// Chat messages starting with this prefix are consumed by the relay
/// instead of propagating as ordinary chat.
pub const CHAT_PREFIX: &str = "!ai ";

/// If `raw` is an AI request, return the prompt (prefix stripped, trimmed).
/// Empty prompts are not requests.
pub fn intercept(raw: &str) -> Option<&str> {
    raw.strip_prefix(CHAT_PREFIX)
        .map(str::trim)
        .filter(|prompt| !prompt.is_empty())
}

/// Host-supplied permission checks. Real hosts back this with their own
/// permission system; the bundled binary allows everything.
pub trait Gatekeeper: Send + Sync {
    /// May this session send prompts to the AI?
    fn can_use(&self, session: &SessionHandle) -> bool;

    /// May this session trigger a credential reload?
    fn can_reload(&self, session: &SessionHandle) -> bool;
}

pub struct AllowAll;

impl Gatekeeper for AllowAll {
    fn can_use(&self, _session: &SessionHandle) -> bool {
        true
    }

    fn can_reload(&self, _session: &SessionHandle) -> bool {
        true
    }
}
