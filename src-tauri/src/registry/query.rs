//! Pure list queries: sorting, search and favorite partitioning
//!
//! These take and return borrowed records so the UI can compose them
//! (sort, then filter, then partition) without cloning.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::PortConfig;

/// Sidebar ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    RecentlyUsed,
    #[default]
    RecentlyAdded,
}

impl SortMode {
    pub fn label(self) -> &'static str {
        match self {
            SortMode::RecentlyUsed => "Recently Used",
            SortMode::RecentlyAdded => "Recently Added",
        }
    }
}

/// Stable sort, newest timestamp first.
///
/// Records without a timestamp sort last and keep their input order.
pub fn sort_by_timestamp_desc<'a>(
    records: impl IntoIterator<Item = &'a PortConfig>,
    stamps: &HashMap<Uuid, DateTime<Utc>>,
) -> Vec<&'a PortConfig> {
    let mut sorted: Vec<&PortConfig> = records.into_iter().collect();
    // Option orders None below any Some, so reversing the comparison puts
    // untouched records at the end.
    sorted.sort_by(|a, b| stamps.get(&b.id).cmp(&stamps.get(&a.id)));
    sorted
}

/// Case-insensitive substring match on `name`; an empty query keeps everything
pub fn filter_by_search<'a>(records: &[&'a PortConfig], query: &str) -> Vec<&'a PortConfig> {
    if query.is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .copied()
        .filter(|port| port.name.to_lowercase().contains(&needle))
        .collect()
}

/// Split into (favorites, others), preserving order within each side
pub fn partition_by_favorite<'a>(
    records: Vec<&'a PortConfig>,
    favorites: &HashSet<Uuid>,
) -> (Vec<&'a PortConfig>, Vec<&'a PortConfig>) {
    records
        .into_iter()
        .partition(|port| favorites.contains(&port.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn named(names: &[&str]) -> Vec<PortConfig> {
        names
            .iter()
            .map(|n| PortConfig::new(*n, "", "", "", ""))
            .collect()
    }

    fn names<'a>(ports: &[&'a PortConfig]) -> Vec<&'a str> {
        ports.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn untouched_records_keep_input_order_after_stamped_ones() {
        let ports = named(&["a", "b", "c", "d"]);
        let now = Utc::now();
        let mut stamps = HashMap::new();
        stamps.insert(ports[2].id, now);
        stamps.insert(ports[3].id, now - Duration::seconds(5));

        let sorted = sort_by_timestamp_desc(&ports, &stamps);
        assert_eq!(names(&sorted), vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn equal_timestamps_are_stable() {
        let ports = named(&["a", "b", "c"]);
        let now = Utc::now();
        let stamps: HashMap<_, _> = ports.iter().map(|p| (p.id, now)).collect();
        let sorted = sort_by_timestamp_desc(&ports, &stamps);
        assert_eq!(names(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let ports = named(&["GA-SQL", "tabnpgs", "gold8appsql"]);
        let refs: Vec<_> = ports.iter().collect();
        assert_eq!(names(&filter_by_search(&refs, "")), names(&refs));
    }

    #[test]
    fn whitespace_in_query_is_part_of_the_match() {
        let ports = named(&["SAML PORT - ocpclientgold8sql", "IOB-SIT", "GA-SQL", "DEMO-tabdemo"]);
        let refs: Vec<_> = ports.iter().collect();
        assert_eq!(
            names(&filter_by_search(&refs, " - ")),
            vec!["SAML PORT - ocpclientgold8sql"]
        );
        assert_eq!(
            names(&filter_by_search(&refs, " ")),
            vec!["SAML PORT - ocpclientgold8sql"]
        );
        assert!(filter_by_search(&refs, "   ").is_empty());
    }

    #[test]
    fn search_ignores_case() {
        let ports = named(&["GA-SQL", "tabnpgs", "gold8appsql", "Sql Server"]);
        let refs: Vec<_> = ports.iter().collect();
        assert_eq!(
            names(&filter_by_search(&refs, "sql")),
            vec!["GA-SQL", "gold8appsql", "Sql Server"]
        );
        assert_eq!(names(&filter_by_search(&refs, "NPGS")), vec!["tabnpgs"]);
        assert!(filter_by_search(&refs, "oracle").is_empty());
    }

    #[test]
    fn partition_preserves_relative_order() {
        let ports = named(&["a", "b", "c", "d", "e"]);
        let favorites: HashSet<_> = [ports[3].id, ports[1].id].into_iter().collect();
        let (favs, others) = partition_by_favorite(ports.iter().collect(), &favorites);
        assert_eq!(names(&favs), vec!["b", "d"]);
        assert_eq!(names(&others), vec!["a", "c", "e"]);
    }

    #[test]
    fn sort_mode_defaults_to_recently_added() {
        assert_eq!(SortMode::default(), SortMode::RecentlyAdded);
        assert_eq!(
            serde_json::to_string(&SortMode::RecentlyUsed).unwrap(),
            "\"recentlyUsed\""
        );
    }
}
