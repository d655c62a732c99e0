//! Deep-link adapter using `tauri-plugin-opener`

use tauri::AppHandle;
use tauri_plugin_opener::OpenerExt;

use crate::domain::{PortError, PortResult};
use crate::ports::LinkOpener;

pub struct TauriLinkOpener {
    app: AppHandle,
}

impl TauriLinkOpener {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl LinkOpener for TauriLinkOpener {
    fn open(&self, url: &str) -> PortResult<()> {
        self.app
            .opener()
            .open_url(url, None::<&str>)
            .map_err(|e| PortError::Opener(e.to_string()))
    }
}
