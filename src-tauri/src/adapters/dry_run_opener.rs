//! Link opener for development without the target application installed.
//!
//! Activate by setting PORTLINK_DRY_RUN=1 in the environment:
//!
//!   PORTLINK_DRY_RUN=1 RUST_LOG=portlink_lib=info npm run tauri dev
//!
//! Every hand-off is logged at INFO level (with the decoded payload) so you
//! can verify exactly what the target application would receive.

use std::sync::Mutex;

use crate::domain::PortResult;
use crate::ports::LinkOpener;

#[derive(Default)]
pub struct DryRunOpener {
    opened: Mutex<Vec<String>>,
}

impl DryRunOpener {
    pub fn new() -> Self {
        log::info!("[DRY RUN] Deep links will be logged, not opened");
        Self::default()
    }

    /// Links "opened" so far, oldest first
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl LinkOpener for DryRunOpener {
    fn open(&self, url: &str) -> PortResult<()> {
        log::info!("[DRY RUN] OPEN → {url}");
        if let Some((_, data)) = url.split_once("?data=") {
            match urlencoding::decode(data) {
                Ok(payload) => log::info!("[DRY RUN] payload:\n{payload}"),
                Err(e) => log::warn!("[DRY RUN] payload is not valid UTF-8: {e}"),
            }
        }
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(url.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_ports;

    #[test]
    fn records_links_instead_of_opening() {
        let opener = DryRunOpener::new();
        let link = sample_ports()[0]
            .deep_link("businessnextparent", "port-data")
            .unwrap();
        opener.open(&link).unwrap();
        opener.open("businessnextparent://port-data").unwrap();
        assert_eq!(opener.opened(), vec![link, "businessnextparent://port-data".to_string()]);
    }
}
