//! National overview page: fetch, merge and hand the result to the map and sidebar.

use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::DashboardConfig,
    merge::{merge_districts, MergedDistrict},
    metrics::{MetricRecord, MetricsSource, NationalSummary, TrendPoint},
    registry::{DistrictId, GeoRegistry},
    render::{MapEvent, MapOutput, MapRenderer},
    selection::{Navigator, Route, SelectionStore, SubscriberId},
    sidebar::{SidebarEntry, SidebarFilter},
};

/// Shown in place of a KPI value while the summary is pending.
pub const PENDING: &str = "...";

/// `1.2M`, `3.4K` or the plain number.
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        value.to_string()
    }
}

/// One decimal plus `%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// One card of the KPI overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: String,
}

impl Kpi {
    fn new(label: &'static str, value: Option<String>) -> Self {
        Self { label, value: value.unwrap_or_else(|| PENDING.to_string()) }
    }
}

/// KPI overlay cards for a summary; `None` renders every value as pending.
pub fn kpi_cards(summary: Option<&NationalSummary>) -> [Kpi; 4] {
    [
        Kpi::new("TOTAL ENROLMENTS", summary.map(|s| format!("{:.1}M", s.total_enrolments as f64 / 1_000_000.0))),
        Kpi::new("AVG SATURATION", summary.map(|s| format_percentage(s.average_saturation))),
        Kpi::new("RISK INDEX", summary.map(|s| s.national_risk_index.to_string())),
        Kpi::new("HIGH RISK DISTS", summary.map(|s| s.high_risk_districts.to_string())),
    ]
}

/// Owner of the overview state.
///
/// Holds the single writable selection and forwards it to the renderer; the
/// renderer and the sidebar only read it.
pub struct Overview<S: MetricsSource> {
    source: S,
    registry: GeoRegistry,
    config: DashboardConfig,
    summary: Option<NationalSummary>,
    month: Option<String>,
    selection: SelectionStore,
    renderer: MapRenderer,
    navigator: Navigator,
    filter: SidebarFilter,
}

impl<S: MetricsSource> Overview<S> {
    /// Start with every registry district at its zeroed defaults.
    pub fn new(source: S, registry: GeoRegistry, config: DashboardConfig) -> Result<Self> {
        config.validate()?;

        let mut renderer = MapRenderer::new(config.viewport()?, config.render_options());
        renderer.set_districts(merge_districts(registry.districts(), &[], &config.merge_options()));

        Ok(Self {
            source,
            registry,
            config,
            summary: None,
            month: None,
            selection: SelectionStore::new(),
            renderer,
            navigator: Navigator::default(),
            filter: SidebarFilter::default(),
        })
    }

    /// Fetch the national summary and the map metrics and re-merge.
    ///
    /// Both requests must succeed; otherwise the error is logged and the
    /// previous summary and districts stay in place. Returns whether the
    /// state was updated.
    pub fn refresh(&mut self, month: Option<&str>) -> bool {
        let fetched = self.source.national_summary()
            .and_then(|summary| Ok((summary, self.source.map_metrics(month)?)));

        let (summary, records) = match fetched {
            Ok(fetched) => fetched,
            Err(err) => {
                tracing::error!("[dashboard] failed to fetch overview data: {err:#}");
                return false;
            }
        };

        tracing::info!("[dashboard] fetched {} map records (month: {})", records.len(), month.unwrap_or("all"));
        self.summary = Some(summary);
        self.month = month.map(str::to_string);
        self.renderer.set_districts(merge_districts(self.registry.districts(), &records, &self.config.merge_options()));
        true
    }

    /// Top-risk districts, using the configured limit when `limit` is `None`.
    pub fn top_risk(&self, limit: Option<usize>) -> Result<Vec<MetricRecord>> {
        self.source.top_risk(limit.unwrap_or(self.config.top_risk_limit))
    }

    /// Backend detail document for a registry district.
    /// The backend keys districts by name, so the registry name is sent.
    pub fn district_details(&self, id: &DistrictId) -> Result<Value> {
        self.source.district_details(&self.district_name(id)?)
    }

    /// Monthly history for a registry district, ordered by month.
    pub fn district_trends(&self, id: &DistrictId) -> Result<Vec<TrendPoint>> {
        self.source.district_trends(&self.district_name(id)?)
    }

    fn district_name(&self, id: &DistrictId) -> Result<String> {
        self.registry.get(id)
            .map(|district| district.name.clone())
            .ok_or_else(|| anyhow!("[dashboard] unknown district {id}"))
    }

    /// Feed a map surface event and apply what it asks of the owner.
    pub fn handle_map_event(&mut self, event: MapEvent) -> Option<MapOutput> {
        let output = self.renderer.handle(event);
        match &output {
            Some(MapOutput::Select(id)) => {
                self.selection.select(id.clone());
                self.renderer.select(self.selection.selected());
            }
            Some(MapOutput::ViewDetails(id)) => {
                self.navigator.navigate(Route::AnomalyRisk { district: Some(id.clone()) });
            }
            None => {}
        }
        output
    }

    /// Selection coming from the sidebar list.
    /// Selecting the current district again re-shows its popup.
    pub fn select_district(&mut self, id: &DistrictId) {
        if !self.registry.contains(id) {
            tracing::warn!("[dashboard] ignoring selection of unknown district {id}");
            return;
        }
        self.selection.select(id.clone());
        self.renderer.select(self.selection.selected());
    }

    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.renderer.select(None);
        }
    }

    /// The four KPI cards, with `...` while the summary is pending.
    pub fn kpis(&self) -> [Kpi; 4] { kpi_cards(self.summary.as_ref()) }

    /// Sidebar rows for the current filter, with the selection highlighted.
    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        self.filter.entries(self.renderer.districts(), self.selection.selected())
    }

    pub fn set_filter(&mut self, filter: SidebarFilter) { self.filter = filter; }

    #[inline] pub fn filter(&self) -> &SidebarFilter { &self.filter }

    #[inline] pub fn districts(&self) -> &[MergedDistrict] { self.renderer.districts() }

    #[inline] pub fn summary(&self) -> Option<&NationalSummary> { self.summary.as_ref() }

    #[inline] pub fn month(&self) -> Option<&str> { self.month.as_deref() }

    #[inline] pub fn selected(&self) -> Option<&DistrictId> { self.selection.selected() }

    /// Observe selection changes (sidebar highlight, detail panel).
    pub fn subscribe(&mut self, listener: impl FnMut(Option<&DistrictId>) + 'static) -> SubscriberId {
        self.selection.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool { self.selection.unsubscribe(id) }

    #[inline] pub fn renderer(&self) -> &MapRenderer { &self.renderer }

    #[inline] pub fn renderer_mut(&mut self) -> &mut MapRenderer { &mut self.renderer }

    #[inline] pub fn route(&self) -> &Route { self.navigator.current() }

    #[inline] pub fn navigator_mut(&mut self) -> &mut Navigator { &mut self.navigator }

    #[inline] pub fn registry(&self) -> &GeoRegistry { &self.registry }

    #[inline] pub fn config(&self) -> &DashboardConfig { &self.config }

    #[inline] pub fn source(&self) -> &S { &self.source }
}
