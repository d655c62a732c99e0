//! Home tab commands — port list, selection, payload, QR, scan and hand-off
//!
//! Views returned here are owned snapshots: the registry lock is released
//! before anything reaches the frontend, the opener or the narrator.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tauri::State;
use uuid::Uuid;

use crate::domain::{PaletteColor, PortConfig, PortPayload};
use crate::registry::{PortRegistry, ScanOutcome, SortMode};
use crate::state::AppState;

/// One row of the sidebar, or the selected-port header
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortView {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub main_app_url: String,
    pub color: PaletteColor,
    pub color_hex: &'static str,
    pub favorite: bool,
    pub selected: bool,
    pub last_used_at: Option<DateTime<Utc>>,
    pub added_at: Option<DateTime<Utc>>,
}

impl PortView {
    fn from_port(registry: &PortRegistry, port: &PortConfig) -> Self {
        let color = port.stable_color();
        Self {
            id: port.id,
            name: port.name.clone(),
            title: port.display_title(),
            main_app_url: port.main_app_url.clone(),
            color,
            color_hex: color.hex(),
            favorite: registry.is_favorite(port.id),
            selected: registry.selected().is_some_and(|s| s.id == port.id),
            last_used_at: registry.last_used_at(port.id),
            added_at: registry.added_at(port.id),
        }
    }
}

/// Sidebar contents: "Favorites" and "Ports"/"Others" sections
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortList {
    pub sort_mode: SortMode,
    pub sort_label: &'static str,
    pub favorites: Vec<PortView>,
    pub others: Vec<PortView>,
}

/// The selected port with its JSON payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPort {
    pub port: PortView,
    pub payload: String,
}

/// Scan result as seen by the frontend
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ScanResult {
    Matched { port: SelectedPort },
    Unknown { payload: String },
    Unrecognized { text: String },
}

fn selected_snapshot(registry: &PortRegistry) -> Result<Option<SelectedPort>, String> {
    registry
        .selected()
        .map(|port| -> Result<SelectedPort, String> {
            Ok(SelectedPort {
                port: PortView::from_port(registry, port),
                payload: port.to_json().map_err(|e| e.to_string())?,
            })
        })
        .transpose()
}

fn require_selected(registry: &PortRegistry) -> Result<SelectedPort, String> {
    selected_snapshot(registry)?.ok_or_else(|| "No port selected".to_string())
}

/// Validate a display name for a new port.
/// Rejects empty names and control characters; anything printable is fine
/// since names never touch the filesystem.
fn sanitize_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Port name cannot be empty".to_string());
    }
    if trimmed.chars().any(char::is_control) {
        return Err("Port name contains invalid characters".to_string());
    }
    Ok(trimmed.to_string())
}

fn announce_selection(state: &AppState, name: &str) {
    let text = state.config.narration_for(name);
    match state.narrator.lock() {
        Ok(guard) => match guard.as_ref() {
            Some(narrator) => narrator.announce(&text),
            None => log::debug!("No narrator installed; skipping \"{text}\""),
        },
        Err(_) => log::warn!("Narrator state corrupted"),
    }
}

pub fn list_ports_in(state: &AppState, query: &str) -> Result<PortList, String> {
    let registry = state.registry()?;
    let view = registry.sidebar(query);
    let mode = registry.sort_mode();
    Ok(PortList {
        sort_mode: mode,
        sort_label: mode.label(),
        favorites: view
            .favorites
            .iter()
            .map(|port| PortView::from_port(&registry, port))
            .collect(),
        others: view
            .others
            .iter()
            .map(|port| PortView::from_port(&registry, port))
            .collect(),
    })
}

pub fn select_port_in(state: &AppState, id: Uuid) -> Result<SelectedPort, String> {
    let selected = {
        let mut registry = state.registry()?;
        registry.select(id).map_err(|e| e.to_string())?;
        require_selected(&registry)?
    };
    announce_selection(state, &selected.port.name);
    Ok(selected)
}

pub fn toggle_favorite_in(state: &AppState, id: Uuid) -> Result<bool, String> {
    let mut registry = state.registry()?;
    registry
        .toggle_favorite(id)
        .ok_or_else(|| format!("Unknown port record: {id}"))
}

pub fn payload_for(state: &AppState, id: Uuid) -> Result<String, String> {
    let registry = state.registry()?;
    let port = registry
        .get(id)
        .ok_or_else(|| format!("Unknown port record: {id}"))?;
    port.to_json().map_err(|e| e.to_string())
}

/// Selected payload for the clipboard
pub fn copy_payload_in(state: &AppState) -> Result<String, String> {
    let registry = state.registry()?;
    Ok(require_selected(&registry)?.payload)
}

/// QR SVG for `id`, or for the selection when `id` is `None`
pub fn render_qr_in(
    state: &AppState,
    id: Option<Uuid>,
    size_px: Option<u32>,
) -> Result<String, String> {
    let payload = match id {
        Some(id) => payload_for(state, id)?,
        None => copy_payload_in(state)?,
    };
    let size = size_px.unwrap_or(state.config.qr_size_px);
    state
        .qr
        .render_svg(&payload, size)
        .map_err(|e| e.to_string())
}

/// Build the deep link for the selection and hand it to the opener.
///
/// An encoding failure aborts before anything is opened. Opener failures
/// (target app not installed) are logged and returned.
pub fn redirect_in(state: &AppState) -> Result<String, String> {
    let link = {
        let registry = state.registry()?;
        let port = registry.selected().ok_or("No port selected")?;
        port.deep_link(&state.config.deep_link_scheme, &state.config.deep_link_host)
            .map_err(|e| {
                log::error!("Deep link for {} not built: {e}", port.name);
                e.to_string()
            })?
    };

    let opener = state
        .opener
        .lock()
        .map_err(|_| "Opener state corrupted".to_string())?;
    let opener = opener.as_ref().ok_or("Link opener not available")?;
    opener.open(&link).map_err(|e| {
        log::warn!("Target app not installed or deep link failed: {e}");
        e.to_string()
    })?;
    log::info!("Handed off {link}");
    Ok(link)
}

pub fn resolve_scanned_in(state: &AppState, text: &str) -> Result<ScanResult, String> {
    let result = {
        let mut registry = state.registry()?;
        match registry.resolve_scanned(text) {
            ScanOutcome::Matched(_) => ScanResult::Matched {
                port: require_selected(&registry)?,
            },
            ScanOutcome::Unknown(payload) => ScanResult::Unknown {
                payload: payload.to_json().map_err(|e| e.to_string())?,
            },
            ScanOutcome::Unrecognized(text) => ScanResult::Unrecognized { text },
        }
    };
    if let ScanResult::Matched { port } = &result {
        announce_selection(state, &port.port.name);
    }
    Ok(result)
}

/// Add a scanned payload under `name` and select it
pub fn add_scanned_port_in(
    state: &AppState,
    name: &str,
    payload: &str,
) -> Result<SelectedPort, String> {
    let name = sanitize_name(name)?;
    let payload = PortPayload::parse(payload).map_err(|e| e.to_string())?;
    let id = {
        let mut registry = state.registry()?;
        if let Ok(json) = payload.to_json() {
            if let Some(existing) = registry.find_by_serialized_payload(&json) {
                return Err(format!("Port already exists as '{}'", existing.name));
            }
        }
        registry.add(&name, payload)
    };
    select_port_in(state, id)
}

#[tauri::command]
pub fn list_ports(state: State<'_, AppState>, query: Option<String>) -> Result<PortList, String> {
    list_ports_in(&state, query.as_deref().unwrap_or(""))
}

#[tauri::command]
pub fn get_selected_port(state: State<'_, AppState>) -> Result<Option<SelectedPort>, String> {
    selected_snapshot(&*state.registry()?)
}

#[tauri::command]
pub fn select_port(state: State<'_, AppState>, id: Uuid) -> Result<SelectedPort, String> {
    select_port_in(&state, id)
}

#[tauri::command]
pub fn toggle_favorite(state: State<'_, AppState>, id: Uuid) -> Result<bool, String> {
    toggle_favorite_in(&state, id)
}

#[tauri::command]
pub fn set_sort_mode(state: State<'_, AppState>, mode: SortMode) -> Result<(), String> {
    state.registry()?.set_sort_mode(mode);
    Ok(())
}

#[tauri::command]
pub fn get_payload(state: State<'_, AppState>, id: Uuid) -> Result<String, String> {
    payload_for(&state, id)
}

#[tauri::command]
pub fn copy_payload(state: State<'_, AppState>) -> Result<String, String> {
    copy_payload_in(&state)
}

#[tauri::command]
pub fn render_qr(
    state: State<'_, AppState>,
    id: Option<Uuid>,
    size_px: Option<u32>,
) -> Result<String, String> {
    render_qr_in(&state, id, size_px)
}

#[tauri::command]
pub fn redirect_to_target(state: State<'_, AppState>) -> Result<String, String> {
    redirect_in(&state)
}

#[tauri::command]
pub fn resolve_scanned_payload(
    state: State<'_, AppState>,
    text: String,
) -> Result<ScanResult, String> {
    resolve_scanned_in(&state, &text)
}

#[tauri::command]
pub fn add_scanned_port(
    state: State<'_, AppState>,
    name: String,
    payload: String,
) -> Result<SelectedPort, String> {
    add_scanned_port_in(&state, &name, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_name_rejects_empty_and_control_chars() {
        assert!(sanitize_name("").is_err());
        assert!(sanitize_name("   ").is_err());
        assert!(sanitize_name("tab\u{7}bell").is_err());
        assert!(sanitize_name("line\nbreak").is_err());
    }

    #[test]
    fn sanitize_name_accepts_valid_names() {
        assert_eq!(sanitize_name(" G8Tab ").unwrap(), "G8Tab");
        assert_eq!(
            sanitize_name("SAML PORT - ocpclientgold8sql").unwrap(),
            "SAML PORT - ocpclientgold8sql"
        );
        assert_eq!(sanitize_name("SBIGOLD7_SA").unwrap(), "SBIGOLD7_SA");
    }
}
