//! External deep-link target port

use crate::domain::PortResult;

/// Hands a URL to the OS so the registered application can open it.
///
/// Fire-and-forget: there is no response contract beyond whether the OS
/// accepted the request.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> PortResult<()>;
}
