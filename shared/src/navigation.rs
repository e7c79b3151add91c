//! Bottom navigation entries and the active-entry rule.

use serde::{Deserialize, Serialize};

use crate::routing::{normalize_path, RouteTable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub path: String,
    pub label: Option<String>,
    pub icon: Option<String>,
}

impl NavEntry {
    /// Navigable routes of `table`, in declared order
    pub fn from_table<C>(table: &RouteTable<C>) -> Vec<NavEntry> {
        table
            .routes()
            .iter()
            .filter(|route| route.is_navigable())
            .map(|route| NavEntry {
                path: route.path.clone(),
                label: route.label.clone(),
                icon: route.nav_icon.clone(),
            })
            .collect()
    }

    pub fn is_icon_only(&self) -> bool {
        self.label.is_none()
    }
}

/// Index of the entry to highlight for `location`.
///
/// An exact path match wins. Otherwise the entry whose path is the longest
/// proper prefix of the location, on `/` segment boundaries, is picked. When
/// nothing matches, `fallback_path` (the default route) and then the first
/// entry are used, so a non-empty bar always has exactly one active entry.
pub fn active_entry(entries: &[NavEntry], location: &str, fallback_path: &str) -> Option<usize> {
    let location = normalize_path(location);

    if let Some(index) = entries.iter().position(|entry| entry.path == location) {
        return Some(index);
    }

    let longest_prefix = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| is_segment_prefix(&entry.path, &location))
        .max_by_key(|(index, entry)| (entry.path.len(), std::cmp::Reverse(*index)))
        .map(|(index, _)| index);
    if longest_prefix.is_some() {
        return longest_prefix;
    }

    let fallback_path = normalize_path(fallback_path);
    entries
        .iter()
        .position(|entry| entry.path == fallback_path)
        .or(if entries.is_empty() { None } else { Some(0) })
}

fn is_segment_prefix(prefix: &str, location: &str) -> bool {
    if prefix == location || !location.starts_with(prefix) {
        return false;
    }
    prefix.ends_with('/') || location[prefix.len()..].starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteDefinition;

    fn entries() -> Vec<NavEntry> {
        let table = RouteTable::new(vec![
            RouteDefinition::new("/", "home").with_label("Home").with_icon("house").as_default(),
            RouteDefinition::new("/insight", "insight").with_label("Insight").with_icon("chart"),
            RouteDefinition::new("/add-transaction", "add").with_icon("plus"),
            RouteDefinition::new("/transactions", "transactions").with_label("Finance"),
            RouteDefinition::new("/hidden", "hidden"),
        ])
        .unwrap();
        NavEntry::from_table(&table)
    }

    #[test]
    fn test_entries_keep_declared_order_and_skip_hidden_routes() {
        let paths: Vec<_> = entries().into_iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/", "/insight", "/add-transaction", "/transactions"]);
        assert!(entries()[2].is_icon_only());
    }

    #[test]
    fn test_exact_match_is_active() {
        assert_eq!(active_entry(&entries(), "/insight", "/"), Some(1));
        assert_eq!(active_entry(&entries(), "/", "/"), Some(0));
    }

    #[test]
    fn test_longest_prefix_is_active() {
        assert_eq!(active_entry(&entries(), "/transactions/42", "/"), Some(3));
        assert_eq!(active_entry(&entries(), "/insight/monthly/july", "/"), Some(1));
        // root is a prefix of everything
        assert_eq!(active_entry(&entries(), "/settings", "/"), Some(0));
    }

    #[test]
    fn test_prefix_respects_segment_boundaries() {
        let entries = vec![
            NavEntry { path: "/insight".to_string(), label: None, icon: None },
            NavEntry { path: "/transactions".to_string(), label: None, icon: None },
        ];
        assert_eq!(active_entry(&entries, "/insights", "/transactions"), Some(1));
    }

    #[test]
    fn test_exactly_one_entry_active_for_any_location() {
        let entries = entries();
        for location in ["/", "/insight", "/unknown", "", "/transactions/", "/add-transaction/x"] {
            let active = active_entry(&entries, location, "/");
            assert!(active.is_some(), "location {:?}", location);
            assert!(active.unwrap() < entries.len());
        }
        assert_eq!(active_entry(&[], "/", "/"), None);
    }

    #[test]
    fn test_first_entry_when_nothing_matches() {
        let entries = vec![
            NavEntry { path: "/a".to_string(), label: None, icon: None },
            NavEntry { path: "/b".to_string(), label: None, icon: None },
        ];
        assert_eq!(active_entry(&entries, "/c", "/missing"), Some(0));
    }
}
