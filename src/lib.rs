#![doc = "AARI dashboard core: district registry, metrics client, merge and map view-model"]
mod config;
mod dashboard;
mod merge;
mod metrics;
mod registry;
mod render;
mod selection;
mod sidebar;

#[doc(inline)]
pub use config::DashboardConfig;

#[doc(inline)]
pub use dashboard::{format_number, format_percentage, kpi_cards, Kpi, Overview, PENDING};

#[doc(inline)]
pub use merge::{merge_districts, normalize_name, DistrictMetrics, MergeOptions, MergedDistrict};

#[cfg(feature = "http")]
#[doc(inline)]
pub use metrics::HttpSource;

#[doc(inline)]
pub use metrics::{MemSource, MetricRecord, MetricsSource, NationalSummary, RiskLevel, TrendPoint};

#[doc(inline)]
pub use registry::{DistrictId, GeoDistrict, GeoRegistry, StateInfo};

#[doc(inline)]
pub use render::{
    diff, draw_order, saturation_label, Camera, FlyTicket, Hsl, MapCommand, MapEvent, MapOutput,
    MapRenderer, MarkerDescriptor, MarkerState, MarkerStyle, PopupContent, PopupPlacement,
    PopupState, RenderOptions, SceneChange, ScreenPoint, Viewport, NEUTRAL, TILE_SIZE,
};

#[doc(inline)]
pub use selection::{Navigator, Route, SelectionStore, SubscriberId};

#[doc(inline)]
pub use sidebar::{RiskFilter, SidebarEntry, SidebarFilter};
