//! Adapters: implementations of the port traits
//!
//! - `system_clock` — wall clock for registry timestamps
//! - `qr_svg` — QR rendering with the `qrcode` crate
//! - `tauri_opener` — deep-link hand-off through `tauri-plugin-opener`
//! - `dry_run_opener` — logs links instead of opening them
//! - `event_narrator` — forwards announcements to the webview

pub mod dry_run_opener;
pub mod event_narrator;
pub mod qr_svg;
pub mod system_clock;
pub mod tauri_opener;
