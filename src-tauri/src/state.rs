//! Application state

use std::sync::{Mutex, MutexGuard};

use crate::adapters::qr_svg::SvgQrRenderer;
use crate::adapters::system_clock::SystemClock;
use crate::domain::{sample_ports, AppConfig, CallSession};
use crate::ports::{Clock, LinkOpener, Narrator, QrRenderer};
use crate::registry::PortRegistry;

/// Shared application state managed by Tauri.
///
/// Every mutation of the registry or call session goes through its mutex;
/// commands copy what they need into owned views before releasing it.
pub struct AppState {
    pub config: AppConfig,
    pub registry: Mutex<PortRegistry>,
    pub call: Mutex<CallSession>,
    pub qr: Box<dyn QrRenderer>,
    /// Installed during setup, once an `AppHandle` exists
    pub opener: Mutex<Option<Box<dyn LinkOpener>>>,
    pub narrator: Mutex<Option<Box<dyn Narrator>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_parts(AppConfig::from_env(), Box::new(SystemClock))
    }

    /// Seeded state with an explicit config and clock
    pub fn with_parts(config: AppConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            config,
            registry: Mutex::new(PortRegistry::seeded(sample_ports(), clock)),
            call: Mutex::new(CallSession::new()),
            qr: Box::new(SvgQrRenderer),
            opener: Mutex::new(None),
            narrator: Mutex::new(None),
        }
    }

    pub fn registry(&self) -> Result<MutexGuard<'_, PortRegistry>, String> {
        self.registry
            .lock()
            .map_err(|_| "Registry state corrupted".to_string())
    }

    pub fn call(&self) -> Result<MutexGuard<'_, CallSession>, String> {
        self.call
            .lock()
            .map_err(|_| "Call state corrupted".to_string())
    }

    pub fn set_opener(&self, opener: Box<dyn LinkOpener>) {
        if let Ok(mut slot) = self.opener.lock() {
            *slot = Some(opener);
        }
    }

    pub fn set_narrator(&self, narrator: Box<dyn Narrator>) {
        if let Ok(mut slot) = self.narrator.lock() {
            *slot = Some(narrator);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
