//! Core domain types
//!
//! Pure types with no I/O dependencies: port records and their payload,
//! the color palette, the call placeholder and app configuration.

pub mod call;
pub mod config;
pub mod error;
pub mod palette;
pub mod port;
pub mod samples;

pub use call::*;
pub use config::*;
pub use error::*;
pub use palette::*;
pub use port::*;
pub use samples::*;
