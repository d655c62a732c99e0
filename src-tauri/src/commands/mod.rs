//! Tauri command handlers
//!
//! Each `#[tauri::command]` is a thin wrapper over a plain function taking
//! `&AppState`, so the same paths run in integration tests without a
//! Tauri runtime.

pub mod call;
pub mod ports;
