//! Port traits (interfaces)
//!
//! These traits define the boundaries between the core and the platform.
//! Adapters implement them with the system clock, the `qrcode` crate and
//! the Tauri runtime; tests swap in in-memory versions.

pub mod clock;
pub mod narrator;
pub mod opener;
pub mod qr;

pub use clock::*;
pub use narrator::*;
pub use opener::*;
pub use qr::*;
