//! Narration adapter: the webview owns speech synthesis, so announcements
//! are forwarded to it as a `narration` event.

use serde::Serialize;
use tauri::{AppHandle, Emitter};

use crate::ports::Narrator;

/// Payload for the `narration` event
#[derive(Clone, Serialize)]
struct NarrationPayload<'a> {
    text: &'a str,
}

pub struct EventNarrator {
    app: AppHandle,
}

impl EventNarrator {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl Narrator for EventNarrator {
    fn announce(&self, text: &str) {
        log::info!("Narration: {text}");
        if let Err(e) = self.app.emit("narration", NarrationPayload { text }) {
            log::warn!("Failed to emit narration event: {e}");
        }
    }
}
