use shared::{RouteDefinition, RouteTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Insight,
    AddTransaction,
    Transactions,
    Profile,
}

fn definitions() -> Vec<RouteDefinition<Page>> {
    vec![
        RouteDefinition::new("/", Page::Home)
            .with_label("Home")
            .with_icon("fas fa-house")
            .as_default(),
        RouteDefinition::new("/insight", Page::Insight)
            .with_label("Insight")
            .with_icon("fas fa-chart-pie"),
        RouteDefinition::new("/add-transaction", Page::AddTransaction).with_icon("fas fa-plus"),
        RouteDefinition::new("/transactions", Page::Transactions)
            .with_label("Finance")
            .with_icon("fas fa-receipt"),
        RouteDefinition::new("/profile", Page::Profile)
            .with_label("Profile")
            .with_icon("fas fa-user"),
    ]
}

/// The application's routes; degrades to a home-only table if invalid
pub fn route_table() -> RouteTable<Page> {
    RouteTable::new(definitions()).unwrap_or_else(|e| {
        log::error!(target: "router", "invalid route table: {}", e);
        RouteTable::single(RouteDefinition::new("/", Page::Home))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{active_entry, NavEntry};

    #[test]
    fn test_route_table_is_valid() {
        assert!(RouteTable::new(definitions()).is_ok());
        assert_eq!(route_table().routes().len(), 5);
        assert_eq!(route_table().default_route().component, Page::Home);
    }

    #[test]
    fn test_add_entry_is_icon_only() {
        let entries = NavEntry::from_table(&route_table());
        let add = entries.iter().find(|e| e.path == "/add-transaction").unwrap();
        assert!(add.is_icon_only());
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_every_location_resolves_and_highlights_one_entry() {
        let table = route_table();
        let entries = NavEntry::from_table(&table);
        for location in ["/", "/insight", "/transactions/42", "/profile", "/index.html", ""] {
            let _ = table.resolve(location);
            assert!(active_entry(&entries, location, &table.default_route().path).is_some());
        }
        assert_eq!(table.resolve("/transactions").component, Page::Transactions);
    }
}
