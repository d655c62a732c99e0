//! Calls tab placeholder
//!
//! Local UI state only: joining a call flips flags, nothing is sent
//! anywhere and no media is captured.

use serde::{Deserialize, Serialize};

use super::error::{PortError, PortResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallState {
    #[default]
    Idle,
    InCall,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSession {
    pub state: CallState,
    pub muted: bool,
    pub video_enabled: bool,
    pub front_camera: bool,
}

impl Default for CallSession {
    fn default() -> Self {
        Self {
            state: CallState::Idle,
            muted: false,
            video_enabled: true,
            front_camera: true,
        }
    }
}

impl CallSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_call(&self) -> bool {
        self.state == CallState::InCall
    }

    /// Enter the call. Joining while already in a call is a no-op.
    pub fn join(&mut self, passcode: &str) -> PortResult<()> {
        if passcode.trim().is_empty() {
            return Err(PortError::InvalidPasscode);
        }
        if !self.is_in_call() {
            log::info!("Joining call");
            self.state = CallState::InCall;
        }
        Ok(())
    }

    /// Leave the call and reset all flags
    pub fn leave(&mut self) {
        if self.is_in_call() {
            log::info!("Leaving call");
        }
        *self = Self::default();
    }

    pub fn toggle_mute(&mut self) -> PortResult<bool> {
        self.require_call()?;
        self.muted = !self.muted;
        Ok(self.muted)
    }

    pub fn toggle_video(&mut self) -> PortResult<bool> {
        self.require_call()?;
        self.video_enabled = !self.video_enabled;
        Ok(self.video_enabled)
    }

    /// Returns true when the front camera is now active
    pub fn switch_camera(&mut self) -> PortResult<bool> {
        self.require_call()?;
        self.front_camera = !self.front_camera;
        Ok(self.front_camera)
    }

    fn require_call(&self) -> PortResult<()> {
        if self.is_in_call() {
            Ok(())
        } else {
            Err(PortError::NotInCall)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_then_leave_resets_flags() {
        let mut call = CallSession::new();
        call.join("1234").unwrap();
        assert!(call.is_in_call());

        assert!(call.toggle_mute().unwrap());
        assert!(!call.toggle_video().unwrap());
        assert!(!call.switch_camera().unwrap());

        call.leave();
        assert_eq!(call, CallSession::default());
    }

    #[test]
    fn toggles_require_active_call() {
        let mut call = CallSession::new();
        assert!(matches!(call.toggle_mute(), Err(PortError::NotInCall)));
        assert!(matches!(call.toggle_video(), Err(PortError::NotInCall)));
        assert!(matches!(call.switch_camera(), Err(PortError::NotInCall)));
        assert_eq!(call, CallSession::default());
    }

    #[test]
    fn empty_passcode_is_rejected() {
        let mut call = CallSession::new();
        assert!(matches!(call.join("  "), Err(PortError::InvalidPasscode)));
        assert_eq!(call.state, CallState::Idle);
    }
}
