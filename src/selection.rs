//! Shared "selected district" value and page navigation.

use std::fmt;

use crate::registry::DistrictId;

/// Handle returned by `SelectionStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

type Listener = Box<dyn FnMut(Option<&DistrictId>)>;

/// Single-writer store for the selected district.
///
/// The owner mutates it; sidebar, map and detail panel observe it through
/// `selected()` or a subscription. Listeners only fire on actual changes.
#[derive(Default)]
pub struct SelectionStore {
    selected: Option<DistrictId>,
    listeners: Vec<(SubscriberId, Listener)>,
    next_id: usize,
}

impl SelectionStore {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn selected(&self) -> Option<&DistrictId> { self.selected.as_ref() }

    #[inline] pub fn is_selected(&self, id: &DistrictId) -> bool { self.selected.as_ref() == Some(id) }

    /// Select a district. Returns false (and notifies nobody) if it was already selected.
    pub fn select(&mut self, id: DistrictId) -> bool {
        if self.is_selected(&id) { return false }
        self.selected = Some(id);
        self.notify();
        true
    }

    /// Clear the selection. Returns false if nothing was selected.
    pub fn clear(&mut self) -> bool {
        if self.selected.take().is_none() { return false }
        self.notify();
        true
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Option<&DistrictId>) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let selected = self.selected.as_ref();
        for (_, listener) in &mut self.listeners {
            listener(selected);
        }
    }
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("selected", &self.selected)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Dashboard pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Overview,
    /// Anomaly & risk page, optionally focused on one district.
    AnomalyRisk { district: Option<DistrictId> },
    TemporalTrends,
    InclusionEquity,
    Logs,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Overview => "/",
            Route::AnomalyRisk { .. } => "/anomaly-risk",
            Route::TemporalTrends => "/temporal-trends",
            Route::InclusionEquity => "/inclusion-equity",
            Route::Logs => "/logs",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Overview => "National Overview",
            Route::AnomalyRisk { .. } => "Anomaly & Risk",
            Route::TemporalTrends => "Temporal Trends",
            Route::InclusionEquity => "Inclusion & Equity",
            Route::Logs => "Logs",
        }
    }

    /// Parse a page path; query strings and trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Some(Route::Overview),
            "/anomaly-risk" => Some(Route::AnomalyRisk { district: None }),
            "/temporal-trends" => Some(Route::TemporalTrends),
            "/inclusion-equity" => Some(Route::InclusionEquity),
            "/logs" => Some(Route::Logs),
            _ => None,
        }
    }
}

/// Current page plus back history.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self { Self { current: Route::Overview, history: Vec::new() } }
}

impl Navigator {
    #[inline] pub fn current(&self) -> &Route { &self.current }

    pub fn navigate(&mut self, route: Route) {
        if route == self.current { return }
        tracing::info!("[navigation] {} -> {}", self.current.path(), route.path());
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    /// Go back one page. Returns false at the start of the history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => { self.current = route; true }
            None => false,
        }
    }
}
