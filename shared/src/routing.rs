//! Route table and location state.
//!
//! `RouteTable` validates its definitions once so that resolution can never
//! fail afterwards: an unknown path silently resolves to the default route.
//! `Router` adds the current location and synchronous change listeners.

use log::debug;
use thiserror::Error;

/// One entry of the route table. `C` is whatever the UI renders for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDefinition<C> {
    pub path: String,
    pub component: C,
    pub nav_icon: Option<String>,
    pub label: Option<String>,
    pub is_default: bool,
}

impl<C> RouteDefinition<C> {
    pub fn new(path: &str, component: C) -> Self {
        Self {
            path: normalize_path(path),
            component,
            nav_icon: None,
            label: None,
            is_default: false,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.nav_icon = Some(icon.to_string());
        self
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Whether the navigation bar shows this route
    pub fn is_navigable(&self) -> bool {
        self.label.is_some() || self.nav_icon.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route table is empty")]
    Empty,
    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),
    #[error("route table has no default route")]
    MissingDefault,
    #[error("route table has more than one default route: `{first}` and `{second}`")]
    MultipleDefaults { first: String, second: String },
}

/// Validated routes: pairwise unique paths, exactly one default
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable<C> {
    routes: Vec<RouteDefinition<C>>,
    default_index: usize,
}

impl<C> RouteTable<C> {
    pub fn new(routes: Vec<RouteDefinition<C>>) -> Result<Self, RouteTableError> {
        if routes.is_empty() {
            return Err(RouteTableError::Empty);
        }

        let mut default_index: Option<usize> = None;
        for (index, route) in routes.iter().enumerate() {
            if routes[..index].iter().any(|other| other.path == route.path) {
                return Err(RouteTableError::DuplicatePath(route.path.clone()));
            }
            if route.is_default {
                if let Some(first) = default_index {
                    return Err(RouteTableError::MultipleDefaults {
                        first: routes[first].path.clone(),
                        second: route.path.clone(),
                    });
                }
                default_index = Some(index);
            }
        }

        let default_index = default_index.ok_or(RouteTableError::MissingDefault)?;
        Ok(Self { routes, default_index })
    }

    /// Table with `route` as its only (and default) entry
    pub fn single(route: RouteDefinition<C>) -> Self {
        Self {
            routes: vec![route.as_default()],
            default_index: 0,
        }
    }

    /// Routes in declared order
    pub fn routes(&self) -> &[RouteDefinition<C>] {
        &self.routes
    }

    pub fn default_route(&self) -> &RouteDefinition<C> {
        &self.routes[self.default_index]
    }

    /// Exact match on the normalized path, otherwise the default route
    pub fn resolve(&self, path: &str) -> &RouteDefinition<C> {
        let path = normalize_path(path);
        self.routes
            .iter()
            .find(|route| route.path == path)
            .unwrap_or_else(|| self.default_route())
    }
}

/// Canonical form of a location path: leading `/`, no trailing `/`
/// (except the root), no query string or fragment.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&str)>;

/// Current location on top of a route table
pub struct Router<C> {
    table: RouteTable<C>,
    location: String,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<C> Router<C> {
    pub fn new(table: RouteTable<C>, initial_location: &str) -> Self {
        Self {
            table,
            location: normalize_path(initial_location),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn table(&self) -> &RouteTable<C> {
        &self.table
    }

    /// The location as requested, which may not name any route
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn active_route(&self) -> &RouteDefinition<C> {
        self.table.resolve(&self.location)
    }

    /// Path of the resolved route
    pub fn active_path(&self) -> &str {
        &self.active_route().path
    }

    /// Moves to `path` and notifies listeners after the change.
    /// Returns `false` (and notifies nobody) when already there.
    pub fn navigate(&mut self, path: &str) -> bool {
        let path = normalize_path(path);
        if path == self.location {
            return false;
        }
        debug!(target: "router", "navigate {} -> {}", self.location, path);
        self.location = path;
        for (_, listener) in &self.listeners {
            listener(&self.location);
        }
        true
    }

    pub fn subscribe(&mut self, listener: impl Fn(&str) + 'static) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Page {
        Home,
        Insight,
        Add,
        Transactions,
    }

    fn table() -> RouteTable<Page> {
        RouteTable::new(vec![
            RouteDefinition::new("/", Page::Home).with_label("Home").as_default(),
            RouteDefinition::new("/insight", Page::Insight).with_label("Insight"),
            RouteDefinition::new("/add-transaction", Page::Add).with_icon("plus"),
            RouteDefinition::new("/transactions", Page::Transactions).with_label("Finance"),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_exact_match() {
        let table = table();
        assert_eq!(table.resolve("/insight").component, Page::Insight);
        assert_eq!(table.resolve("/transactions/").component, Page::Transactions);
        assert_eq!(table.resolve("/add-transaction?type=income").component, Page::Add);
    }

    #[test]
    fn test_unknown_path_falls_back_to_default() {
        let table = table();
        for path in ["/nope", "", "/insight/extra", "/INSIGHT"] {
            assert_eq!(table.resolve(path).component, Page::Home, "path {:?}", path);
        }
    }

    #[test]
    fn test_table_validation() {
        assert_eq!(RouteTable::<Page>::new(vec![]), Err(RouteTableError::Empty));
        assert_eq!(
            RouteTable::new(vec![RouteDefinition::new("/", Page::Home)]),
            Err(RouteTableError::MissingDefault)
        );
        assert_eq!(
            RouteTable::new(vec![
                RouteDefinition::new("/", Page::Home).as_default(),
                RouteDefinition::new("/insight", Page::Insight).as_default(),
            ]),
            Err(RouteTableError::MultipleDefaults {
                first: "/".to_string(),
                second: "/insight".to_string(),
            })
        );
        assert_eq!(
            RouteTable::new(vec![
                RouteDefinition::new("/", Page::Home).as_default(),
                RouteDefinition::new("/insight", Page::Insight),
                RouteDefinition::new("/insight/", Page::Add),
            ]),
            Err(RouteTableError::DuplicatePath("/insight".to_string()))
        );
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("insight"), "/insight");
        assert_eq!(normalize_path("/insight/#top"), "/insight");
    }

    #[test]
    fn test_navigate_notifies_listeners_synchronously() {
        let mut router = Router::new(table(), "/");
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let seen_clone = Rc::clone(&seen);
        router.subscribe(move |path| seen_clone.borrow_mut().push(path.to_string()));

        assert!(router.navigate("/insight"));
        assert_eq!(*seen.borrow(), vec!["/insight".to_string()]);
        assert_eq!(router.active_path(), "/insight");

        // same location: nothing happens
        assert!(!router.navigate("/insight/"));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut router = Router::new(table(), "/");
        let count = Rc::new(RefCell::new(0));
        let count_clone = Rc::clone(&count);
        let id = router.subscribe(move |_| *count_clone.borrow_mut() += 1);

        router.navigate("/transactions");
        assert!(router.unsubscribe(id));
        assert!(!router.unsubscribe(id));
        router.navigate("/insight");

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_unknown_location_keeps_raw_path_but_resolves_default() {
        let router = Router::new(table(), "/transactions/42");
        assert_eq!(router.location(), "/transactions/42");
        assert_eq!(router.active_path(), "/");
        assert_eq!(router.active_route().component, Page::Home);
    }

    #[test]
    fn test_single_route_table_resolves_everything_to_it() {
        let table = RouteTable::single(RouteDefinition::new("/", Page::Home));
        assert_eq!(table.routes().len(), 1);
        assert!(table.default_route().is_default);
        assert_eq!(table.resolve("/anything").component, Page::Home);
    }
}
