//! Registry change notifications
//!
//! The registry does not rely on any UI binding magic: observers register
//! a listener and get called synchronously after each mutation.

use serde::Serialize;
use uuid::Uuid;

use super::query::SortMode;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum RegistryEvent {
    Selected(Uuid),
    FavoritesChanged,
    SortModeChanged(SortMode),
    Added(Uuid),
}

/// Listener callback, called on the thread that mutated the registry
pub type Listener = Box<dyn Fn(&RegistryEvent) + Send>;
