//! Calls tab commands — local toggles only, no media or signaling

use tauri::State;

use crate::domain::{CallSession, PortResult};
use crate::state::AppState;

/// Lock the call session, run `f`, and return a snapshot of the result state
fn with_call(
    state: &AppState,
    f: impl FnOnce(&mut CallSession) -> PortResult<()>,
) -> Result<CallSession, String> {
    let mut call = state.call()?;
    f(&mut *call).map_err(|e| e.to_string())?;
    Ok(call.clone())
}

pub fn join_call_in(state: &AppState, passcode: &str) -> Result<CallSession, String> {
    with_call(state, |c| c.join(passcode))
}

pub fn leave_call_in(state: &AppState) -> Result<CallSession, String> {
    with_call(state, |c| {
        c.leave();
        Ok(())
    })
}

#[tauri::command]
pub fn get_call_state(state: State<'_, AppState>) -> Result<CallSession, String> {
    Ok(state.call()?.clone())
}

#[tauri::command]
pub fn join_call(state: State<'_, AppState>, passcode: String) -> Result<CallSession, String> {
    join_call_in(&state, &passcode)
}

#[tauri::command]
pub fn leave_call(state: State<'_, AppState>) -> Result<CallSession, String> {
    leave_call_in(&state)
}

#[tauri::command]
pub fn toggle_mute(state: State<'_, AppState>) -> Result<CallSession, String> {
    with_call(&state, |c| c.toggle_mute().map(|_| ()))
}

#[tauri::command]
pub fn toggle_video(state: State<'_, AppState>) -> Result<CallSession, String> {
    with_call(&state, |c| c.toggle_video().map(|_| ()))
}

#[tauri::command]
pub fn switch_camera(state: State<'_, AppState>) -> Result<CallSession, String> {
    with_call(&state, |c| c.switch_camera().map(|_| ()))
}
