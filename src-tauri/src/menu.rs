//! Native menu bar setup
//!
//! Creates the application menu bar with File, Ports, View, and Help menus.
//! Sort-mode items are applied to the registry directly; every menu event
//! is also emitted to the frontend for handling.

use tauri::{
    menu::{MenuBuilder, MenuItemBuilder, SubmenuBuilder},
    App, Emitter, Manager,
};

use crate::registry::SortMode;
use crate::state::AppState;

/// Menu event payload sent to frontend
#[derive(Clone, serde::Serialize)]
pub struct MenuEvent {
    pub id: String,
}

const SCAN_QR: &str = "scan_qr";
const COPY_PAYLOAD: &str = "copy_payload";
const REDIRECT: &str = "redirect";
const THEME_LIGHT: &str = "theme_light";
const THEME_DARK: &str = "theme_dark";
const THEME_SYSTEM: &str = "theme_system";
const ABOUT: &str = "about";

/// Items acted on by the webview's `menu-event` listener
#[cfg(test)]
const WEBVIEW_ITEMS: &[&str] = &[
    SCAN_QR,
    COPY_PAYLOAD,
    REDIRECT,
    THEME_LIGHT,
    THEME_DARK,
    THEME_SYSTEM,
    ABOUT,
];

/// Map a menu id to the sort mode it selects
fn sort_mode_for(id: &str) -> Option<SortMode> {
    match id {
        "sort_recently_used" => Some(SortMode::RecentlyUsed),
        "sort_recently_added" => Some(SortMode::RecentlyAdded),
        _ => None,
    }
}

/// Set up the application menu bar
pub fn setup_menu(app: &App) -> Result<(), Box<dyn std::error::Error>> {
    let handle = app.handle();

    let file_menu = SubmenuBuilder::new(handle, "File").quit().build()?;

    // Build Ports menu
    let scan_qr = MenuItemBuilder::with_id(SCAN_QR, "Scan QR...")
        .accelerator("CmdOrCtrl+K")
        .build(handle)?;

    let copy_payload = MenuItemBuilder::with_id(COPY_PAYLOAD, "Copy Port Data")
        .accelerator("CmdOrCtrl+Shift+C")
        .build(handle)?;

    let redirect = MenuItemBuilder::with_id(REDIRECT, "Redirect to Businessnext")
        .accelerator("CmdOrCtrl+Enter")
        .build(handle)?;

    let sort_used = MenuItemBuilder::with_id("sort_recently_used", SortMode::RecentlyUsed.label())
        .build(handle)?;

    let sort_added =
        MenuItemBuilder::with_id("sort_recently_added", SortMode::RecentlyAdded.label())
            .build(handle)?;

    let sort_menu = SubmenuBuilder::new(handle, "Sort By")
        .item(&sort_used)
        .item(&sort_added)
        .build()?;

    let ports_menu = SubmenuBuilder::new(handle, "Ports")
        .item(&scan_qr)
        .item(&copy_payload)
        .item(&redirect)
        .separator()
        .item(&sort_menu)
        .build()?;

    // Build View menu
    let theme_light = MenuItemBuilder::with_id(THEME_LIGHT, "Light Theme").build(handle)?;

    let theme_dark = MenuItemBuilder::with_id(THEME_DARK, "Dark Theme").build(handle)?;

    let theme_system = MenuItemBuilder::with_id(THEME_SYSTEM, "System Theme").build(handle)?;

    let view_menu = SubmenuBuilder::new(handle, "View")
        .item(&theme_light)
        .item(&theme_dark)
        .item(&theme_system)
        .build()?;

    // Build Help menu
    let about = MenuItemBuilder::with_id(ABOUT, "About Portlink").build(handle)?;

    let help_menu = SubmenuBuilder::new(handle, "Help").item(&about).build()?;

    // Build the complete menu bar
    let menu = MenuBuilder::new(handle)
        .item(&file_menu)
        .item(&ports_menu)
        .item(&view_menu)
        .item(&help_menu)
        .build()?;

    // Set the menu at app level (works on macOS)
    app.set_menu(menu)?;

    // Handle menu events at app level
    app.on_menu_event(move |app_handle, event| {
        let id = event.id().0.clone();
        log::debug!("Menu event: {id}");

        if let Some(mode) = sort_mode_for(&id) {
            match app_handle.state::<AppState>().registry() {
                Ok(mut registry) => registry.set_sort_mode(mode),
                Err(e) => log::warn!("Sort change ignored: {e}"),
            }
        }

        // Emit event to frontend
        let _ = app_handle.emit("menu-event", MenuEvent { id });
    });

    Ok(())
}
