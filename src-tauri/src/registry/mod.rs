//! Port registry: the set of known ports plus the per-session state
//! around them (favorites, usage and addition timestamps, sort mode,
//! current selection).
//!
//! Nothing here is persisted. The registry lives for one UI session and is
//! mutated only through `&mut self`; callers that share it across threads
//! wrap it in a single `Mutex` (see `state::AppState`).

pub mod events;
pub mod query;

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::{PortConfig, PortError, PortPayload, PortResult};
use crate::ports::Clock;

pub use events::{Listener, RegistryEvent};
pub use query::{filter_by_search, partition_by_favorite, sort_by_timestamp_desc, SortMode};

/// Result of matching a scanned QR code against the registry
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Exact payload match; the record is now selected
    Matched(Uuid),
    /// Valid payload that no record produces; candidate for `add`
    Unknown(PortPayload),
    /// Not a port payload at all
    Unrecognized(String),
}

/// Sidebar sections after sorting and search
#[derive(Debug, Default)]
pub struct SidebarView<'a> {
    pub favorites: Vec<&'a PortConfig>,
    pub others: Vec<&'a PortConfig>,
}

pub struct PortRegistry {
    records: Vec<PortConfig>,
    favorites: HashSet<Uuid>,
    last_used_at: HashMap<Uuid, DateTime<Utc>>,
    added_at: HashMap<Uuid, DateTime<Utc>>,
    sort_mode: SortMode,
    selected: Option<Uuid>,
    clock: Box<dyn Clock>,
    listeners: Vec<Listener>,
}

impl PortRegistry {
    /// Seed the registry. Addition timestamps are synthesized one second
    /// apart, newest first, so "recently added" matches seed order.
    pub fn seeded(records: Vec<PortConfig>, clock: Box<dyn Clock>) -> Self {
        let now = clock.now();
        let mut seen = HashSet::new();
        let records: Vec<PortConfig> = records
            .into_iter()
            .filter(|port| {
                let fresh = seen.insert(port.id);
                if !fresh {
                    log::warn!("Dropping duplicate port id {} ({})", port.id, port.name);
                }
                fresh
            })
            .collect();
        let added_at = records
            .iter()
            .enumerate()
            .map(|(i, port)| (port.id, now - Duration::seconds(i as i64)))
            .collect();
        let selected = records.first().map(|port| port.id);

        log::info!("Port registry seeded with {} records", records.len());

        Self {
            records,
            favorites: HashSet::new(),
            last_used_at: HashMap::new(),
            added_at,
            sort_mode: SortMode::default(),
            selected,
            clock,
            listeners: Vec::new(),
        }
    }

    pub fn records(&self) -> &[PortConfig] {
        &self.records
    }

    pub fn get(&self, id: Uuid) -> Option<&PortConfig> {
        self.records.iter().find(|port| port.id == id)
    }

    fn require(&self, id: Uuid) -> PortResult<&PortConfig> {
        self.get(id).ok_or(PortError::UnknownRecord(id))
    }

    pub fn last_used_at(&self, id: Uuid) -> Option<DateTime<Utc>> {
        self.last_used_at.get(&id).copied()
    }

    pub fn added_at(&self, id: Uuid) -> Option<DateTime<Utc>> {
        self.added_at.get(&id).copied()
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        if self.sort_mode != mode {
            self.sort_mode = mode;
            self.notify(RegistryEvent::SortModeChanged(mode));
        }
    }

    /// All records in the given order
    pub fn sorted_records(&self, mode: SortMode) -> Vec<&PortConfig> {
        let stamps = match mode {
            SortMode::RecentlyUsed => &self.last_used_at,
            SortMode::RecentlyAdded => &self.added_at,
        };
        sort_by_timestamp_desc(&self.records, stamps)
    }

    /// Sorted by the current mode, searched, then split into sections
    pub fn sidebar(&self, query: &str) -> SidebarView<'_> {
        let sorted = self.sorted_records(self.sort_mode);
        let filtered = filter_by_search(&sorted, query);
        let (favorites, others) = partition_by_favorite(filtered, &self.favorites);
        SidebarView { favorites, others }
    }

    /// Stamp `id` as used now. Unknown ids are logged and ignored.
    pub fn mark_used(&mut self, id: Uuid) {
        if self.get(id).is_none() {
            log::warn!("mark_used: {}", PortError::UnknownRecord(id));
            return;
        }
        self.last_used_at.insert(id, self.clock.now());
    }

    pub fn favorites(&self) -> &HashSet<Uuid> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: Uuid) -> bool {
        self.favorites.contains(&id)
    }

    /// Flip favorite status. Returns the new status, or `None` for an
    /// unknown id (which leaves favorites untouched).
    pub fn toggle_favorite(&mut self, id: Uuid) -> Option<bool> {
        if self.get(id).is_none() {
            log::warn!("toggle_favorite: {}", PortError::UnknownRecord(id));
            return None;
        }
        let now_favorite = if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        };
        self.notify(RegistryEvent::FavoritesChanged);
        Some(now_favorite)
    }

    pub fn selected(&self) -> Option<&PortConfig> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Make `id` the current selection and stamp it as used
    pub fn select(&mut self, id: Uuid) -> PortResult<&PortConfig> {
        self.require(id)?;
        self.selected = Some(id);
        self.mark_used(id);
        self.notify(RegistryEvent::Selected(id));
        self.require(id)
    }

    /// True if some record serializes to exactly `json`
    pub fn contains_by_serialized_payload(&self, json: &str) -> bool {
        self.find_by_serialized_payload(json).is_some()
    }

    pub fn find_by_serialized_payload(&self, json: &str) -> Option<&PortConfig> {
        self.records
            .iter()
            .find(|port| port.to_json().is_ok_and(|payload| payload == json))
    }

    /// Match a decoded QR string. An exact match selects that record.
    pub fn resolve_scanned(&mut self, text: &str) -> ScanOutcome {
        if let Some(id) = self.find_by_serialized_payload(text).map(|port| port.id) {
            log::info!("Scanned payload matches port {id}");
            // Known id, cannot fail
            let _ = self.select(id);
            return ScanOutcome::Matched(id);
        }
        match PortPayload::parse(text) {
            Ok(payload) => ScanOutcome::Unknown(payload),
            Err(e) => {
                log::debug!("Scanned text is not a port payload: {e}");
                ScanOutcome::Unrecognized(text.to_string())
            }
        }
    }

    /// Add a new record; it becomes the most recently added
    pub fn add(&mut self, name: &str, payload: PortPayload) -> Uuid {
        let port = PortConfig::from_payload(name.trim(), payload);
        let id = port.id;
        self.added_at.insert(id, self.clock.now());
        log::info!("Added port {} ({id})", port.name);
        self.records.push(port);
        self.notify(RegistryEvent::Added(id));
        id
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn notify(&self, event: RegistryEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_ports;
    use std::sync::{Arc, Mutex};

    /// Clock that advances one second per reading
    struct StepClock(Mutex<DateTime<Utc>>);

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            let mut t = self.0.lock().unwrap();
            *t += Duration::seconds(1);
            *t
        }
    }

    fn registry() -> PortRegistry {
        PortRegistry::seeded(sample_ports(), Box::new(StepClock(Mutex::new(Utc::now()))))
    }

    fn ids(ports: &[&PortConfig]) -> Vec<Uuid> {
        ports.iter().map(|p| p.id).collect()
    }

    #[test]
    fn recently_added_matches_seed_order() {
        let reg = registry();
        let seed: Vec<Uuid> = reg.records().iter().map(|p| p.id).collect();
        assert_eq!(ids(&reg.sorted_records(SortMode::RecentlyAdded)), seed);
    }

    #[test]
    fn recently_used_puts_latest_first() {
        let mut reg = registry();
        let x = reg.records()[5].id;
        let y = reg.records()[9].id;
        reg.mark_used(x);
        reg.mark_used(y);

        let sorted = ids(&reg.sorted_records(SortMode::RecentlyUsed));
        assert_eq!(&sorted[..2], &[y, x]);
        // Untouched records follow in seed order
        let rest: Vec<Uuid> = reg
            .records()
            .iter()
            .map(|p| p.id)
            .filter(|id| *id != x && *id != y)
            .collect();
        assert_eq!(&sorted[2..], rest.as_slice());
    }

    #[test]
    fn mark_used_ignores_unknown_id() {
        let mut reg = registry();
        reg.mark_used(Uuid::new_v4());
        assert!(reg.records().iter().all(|p| reg.last_used_at(p.id).is_none()));
    }

    #[test]
    fn toggle_favorite_twice_restores_state() {
        let mut reg = registry();
        let id = reg.records()[3].id;
        let before = reg.favorites().clone();
        assert_eq!(reg.toggle_favorite(id), Some(true));
        assert!(reg.is_favorite(id));
        assert_eq!(reg.toggle_favorite(id), Some(false));
        assert_eq!(reg.favorites(), &before);
    }

    #[test]
    fn toggle_favorite_unknown_id_is_noop() {
        let mut reg = registry();
        assert_eq!(reg.toggle_favorite(Uuid::new_v4()), None);
        assert!(reg.favorites().is_empty());
    }

    #[test]
    fn sidebar_splits_favorites_and_applies_search() {
        let mut reg = registry();
        let ga_sql = reg.records().iter().find(|p| p.name == "GA-SQL").unwrap().id;
        reg.toggle_favorite(ga_sql);

        let view = reg.sidebar("sql");
        assert_eq!(ids(&view.favorites), vec![ga_sql]);
        assert!(view.others.iter().all(|p| p.name.to_lowercase().contains("sql")));
        assert!(!view.others.is_empty());

        let all = reg.sidebar("");
        assert_eq!(all.favorites.len() + all.others.len(), 18);
    }

    #[test]
    fn select_defaults_to_first_and_marks_used() {
        let mut reg = registry();
        assert_eq!(reg.selected().unwrap().name, "G8Tab");

        let id = reg.records()[2].id;
        assert_eq!(reg.select(id).unwrap().name, "IOB-SIT");
        assert_eq!(reg.selected().unwrap().id, id);
        assert!(reg.last_used_at(id).is_some());

        assert!(matches!(
            reg.select(Uuid::new_v4()),
            Err(PortError::UnknownRecord(_))
        ));
        assert_eq!(reg.selected().unwrap().id, id);
    }

    #[test]
    fn payload_lookup_requires_exact_match() {
        let reg = registry();
        let json = reg.records()[0].to_json().unwrap();
        assert!(reg.contains_by_serialized_payload(&json));

        let altered = json.replacen("g8tab/", "g8tab", 1);
        assert!(!reg.contains_by_serialized_payload(&altered));
        assert!(!reg.contains_by_serialized_payload(""));
    }

    #[test]
    fn resolve_scanned_covers_all_outcomes() {
        let mut reg = registry();
        let target = reg.records()[4].clone();

        let json = target.to_json().unwrap();
        assert_eq!(reg.resolve_scanned(&json), ScanOutcome::Matched(target.id));
        assert_eq!(reg.selected().unwrap().id, target.id);

        let compact = serde_json::to_string(&target.payload()).unwrap();
        assert_eq!(
            reg.resolve_scanned(&compact),
            ScanOutcome::Unknown(target.payload())
        );

        assert_eq!(
            reg.resolve_scanned("hello"),
            ScanOutcome::Unrecognized("hello".into())
        );
    }

    #[test]
    fn added_port_is_most_recently_added() {
        let mut reg = registry();
        let payload = PortPayload::parse(
            r#"{"applicationRootUrl":"https://n/m/","apiRootUrl":"https://n/r/","mainAppUrl":"https://n/tabnew/","ocpRootUrl":""}"#,
        )
        .unwrap();
        let id = reg.add("  New Port ", payload);

        let sorted = reg.sorted_records(SortMode::RecentlyAdded);
        assert_eq!(sorted[0].id, id);
        assert_eq!(sorted[0].name, "New Port");
        assert_eq!(sorted[0].display_title(), "tabnew");
        assert_eq!(reg.records().len(), 19);
    }

    #[test]
    fn listeners_see_mutations() {
        let mut reg = registry();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        reg.subscribe(Box::new(move |event| sink.lock().unwrap().push(event.clone())));

        let id = reg.records()[1].id;
        reg.select(id).unwrap();
        reg.toggle_favorite(id);
        reg.set_sort_mode(SortMode::RecentlyUsed);
        reg.set_sort_mode(SortMode::RecentlyUsed);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                RegistryEvent::Selected(id),
                RegistryEvent::FavoritesChanged,
                RegistryEvent::SortModeChanged(SortMode::RecentlyUsed),
            ]
        );
    }

    #[test]
    fn duplicate_seed_ids_are_dropped() {
        let port = PortConfig::new("dup", "", "", "", "");
        let reg = PortRegistry::seeded(
            vec![port.clone(), port],
            Box::new(StepClock(Mutex::new(Utc::now()))),
        );
        assert_eq!(reg.records().len(), 1);
    }
}
