//! Portlink
//!
//! A port-configuration picker: choose a named server environment, show it
//! as JSON and as a QR code, scan codes from other devices, and hand the
//! selection to the target application through its URL scheme.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `registry/` - Port registry: sorting, search, favorites, selection
//! - `ports/` - Trait definitions (interfaces) for platform services
//! - `adapters/` - Implementations of ports (clock, qrcode, opener, narration)
//! - `commands/` - Tauri command handlers (driving adapters)
//! - `state/` - Application state management

// Core (pure, no I/O)
pub mod domain;
pub mod ports;
pub mod registry;

// Adapters (external I/O)
pub mod adapters;

// Tauri integration
pub mod commands;
#[cfg(desktop)]
pub mod menu;
pub mod state;

use tauri::{Emitter, Manager};

use adapters::dry_run_opener::DryRunOpener;
use adapters::event_narrator::EventNarrator;
use adapters::tauri_opener::TauriLinkOpener;
use state::AppState;

/// Set to "1" to log deep links instead of opening them
pub const ENV_DRY_RUN: &str = "PORTLINK_DRY_RUN";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("portlink_lib=info"),
    )
    .try_init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(AppState::new())
        .setup(|app| {
            let handle = app.handle().clone();
            let state = app.state::<AppState>();

            if std::env::var(ENV_DRY_RUN).is_ok_and(|v| v == "1") {
                state.set_opener(Box::new(DryRunOpener::new()));
            } else {
                state.set_opener(Box::new(TauriLinkOpener::new(handle.clone())));
            }
            state.set_narrator(Box::new(EventNarrator::new(handle.clone())));

            // Push registry changes to the webview instead of making it poll
            let events = handle.clone();
            state
                .registry()?
                .subscribe(Box::new(move |event| {
                    if let Err(e) = events.emit("registry-changed", event) {
                        log::warn!("Failed to emit registry event: {e}");
                    }
                }));

            #[cfg(desktop)]
            menu::setup_menu(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Home tab
            commands::ports::list_ports,
            commands::ports::get_selected_port,
            commands::ports::select_port,
            commands::ports::toggle_favorite,
            commands::ports::set_sort_mode,
            commands::ports::get_payload,
            commands::ports::copy_payload,
            commands::ports::render_qr,
            commands::ports::redirect_to_target,
            // QR scanning
            commands::ports::resolve_scanned_payload,
            commands::ports::add_scanned_port,
            // Calls tab
            commands::call::get_call_state,
            commands::call::join_call,
            commands::call::leave_call,
            commands::call::toggle_mute,
            commands::call::toggle_video,
            commands::call::switch_camera,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
