use std::{cell::RefCell, rc::Rc};

use aari::{
    merge_districts, DashboardConfig, DistrictId, GeoDistrict, GeoRegistry, MapCommand, MapEvent, MapOutput,
    MarkerState, MemSource, MergeOptions, MetricRecord, NationalSummary, Overview, PopupState, RiskFilter,
    RiskLevel, Route, SidebarFilter,
};

fn summary() -> NationalSummary {
    NationalSummary {
        total_enrolments: 1_380_000_000,
        average_saturation: 94.2,
        national_risk_index: 31.0,
        high_risk_districts: 12,
    }
}

fn records() -> Vec<MetricRecord> {
    vec![
        MetricRecord::new(" south delhi", "Delhi", 92.3, "High"),
        MetricRecord { uii: Some(0.734), ..MetricRecord::new("LEH", "Ladakh", 64.0, "Priority") },
        MetricRecord::new("Mumbai Suburban", "Maharashtra", 97.8, "Low"),
        MetricRecord::new("Atlantis", "Nowhere", 10.0, "Critical"),
    ]
}

/// Overview on the built-in registry, fetched and loaded.
fn overview() -> Overview<MemSource> {
    let mut overview = Overview::new(MemSource::new(summary(), records()), GeoRegistry::india(), DashboardConfig::default()).unwrap();
    assert!(overview.refresh(None));
    overview.handle_map_event(MapEvent::Loaded);
    overview
}

fn settle(overview: &mut Overview<MemSource>) {
    overview.renderer_mut().settle();
}

#[test]
fn single_district_scenario() {
    let registry = vec![GeoDistrict::new("DL-SOUTH", "South Delhi", "Delhi", "DL", 77.21, 28.54)];
    let records = vec![MetricRecord::new("south delhi", "Delhi", 92.3, "High")];

    let merged = merge_districts(&registry, &records, &MergeOptions::default());
    assert_eq!(merged.len(), 1);

    let json = serde_json::to_value(&merged[0]).unwrap();
    assert_eq!(json["id"], "DL-SOUTH");
    assert_eq!(json["name"], "South Delhi");
    assert_eq!(json["riskLevel"], "high");
    assert_eq!(json["metrics"]["saturationRatio"], 92.3);
    assert_eq!(json["coordinates"], serde_json::json!([77.21, 28.54]));
}

#[test]
fn refresh_merges_over_the_whole_registry() {
    let overview = overview();
    let districts = overview.districts();
    assert_eq!(districts.len(), GeoRegistry::india().len());
    assert_eq!(districts.iter().filter(|d| d.has_metrics).count(), 3);

    let leh = districts.iter().find(|d| d.id.as_str() == "LA-LEH").unwrap();
    assert_eq!(leh.risk_level, RiskLevel::Critical);
    assert!((leh.metrics.update_intensity - 73.4).abs() < 0.01);

    let kpis = overview.kpis();
    assert_eq!(kpis[0].value, "1380.0M");
    assert_eq!(kpis[1].value, "94.2%");
    assert_eq!(kpis[2].value, "31");
}

#[test]
fn background_click_hides_popup_but_keeps_shared_selection() {
    let mut overview = overview();
    let south = DistrictId::from("DL-SOUTH");

    let output = overview.handle_map_event(MapEvent::MarkerClicked(south.clone()));
    assert_eq!(output, Some(MapOutput::Select(south.clone())));
    settle(&mut overview);
    assert!(overview.renderer().popup().is_some());
    assert_eq!(overview.selected(), Some(&south));

    overview.handle_map_event(MapEvent::BackgroundClicked);
    assert_eq!(overview.renderer().popup_state(), &PopupState::Idle);
    assert_eq!(overview.selected(), Some(&south));

    // The sidebar still highlights it, and selecting it again brings the popup back.
    let highlighted = overview.sidebar().into_iter().filter(|entry| entry.highlighted).collect::<Vec<_>>();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].id, south);

    overview.select_district(&south);
    assert_eq!(overview.renderer().popup().unwrap().district, south);
}

#[test]
fn sidebar_selection_flies_then_shows_popup() {
    let mut overview = overview();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    overview.subscribe(move |id| sink.borrow_mut().push(id.map(|id| id.to_string())));

    overview.select_district(&DistrictId::from("LA-LEH"));
    assert!(overview.renderer().popup().is_none());

    let commands = overview.renderer_mut().drain_commands();
    let ticket = match commands.as_slice() {
        [MapCommand::FlyTo { center, zoom, duration_ms, ticket }] => {
            assert_eq!((center.x, center.y), (77.5771, 34.1526));
            assert_eq!(*zoom, 6.5);
            assert_eq!(*duration_ms, 1000);
            *ticket
        }
        other => panic!("unexpected commands {other:?}"),
    };

    overview.handle_map_event(MapEvent::Moved(aari::Camera::new(77.5771, 34.1526, 6.5)));
    overview.handle_map_event(MapEvent::FlyToFinished(ticket));
    let popup = overview.renderer().popup_content().unwrap();
    assert_eq!(popup.name, "Leh");
    assert_eq!(popup.badge, "Priority Risk");

    let frame = overview.renderer().frame();
    let leh = frame.iter().find(|marker| marker.id.as_str() == "LA-LEH").unwrap();
    assert_eq!(leh.state, MarkerState::Selected);
    assert_eq!(leh.label, "64%");

    assert_eq!(*seen.borrow(), vec![Some("LA-LEH".to_string())]);
}

#[test]
fn view_details_navigates_to_anomaly_page() {
    let mut overview = overview();
    let mumbai = DistrictId::from("MH-MUMBAI");
    overview.handle_map_event(MapEvent::MarkerClicked(mumbai.clone()));

    let output = overview.handle_map_event(MapEvent::ViewDetailsClicked);
    assert_eq!(output, Some(MapOutput::ViewDetails(mumbai.clone())));
    assert_eq!(overview.route(), &Route::AnomalyRisk { district: Some(mumbai) });

    assert!(overview.navigator_mut().back());
    assert_eq!(overview.route(), &Route::Overview);
}

#[test]
fn failed_refresh_keeps_rendered_state() {
    let mut overview = overview();
    overview.handle_map_event(MapEvent::MarkerClicked(DistrictId::from("DL-SOUTH")));
    settle(&mut overview);
    let before = overview.districts().to_vec();

    assert!(!overview.refresh(Some("2031-01")));
    assert_eq!(overview.districts(), &before[..]);
    assert!(overview.renderer().popup().is_some());
    assert_eq!(overview.kpis()[3].value, "12");
}

#[test]
fn sidebar_filter_over_merged_districts() {
    let mut overview = overview();
    overview.set_filter(SidebarFilter::new("", "critical".parse::<RiskFilter>().unwrap()));
    let rows = overview.sidebar();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id.as_str(), "LA-LEH");

    overview.set_filter(SidebarFilter::new("maharashtra", RiskFilter::All));
    assert_eq!(overview.sidebar().len(), GeoRegistry::india().districts_in_state("MH").count());
}

#[test]
fn selection_before_map_load_is_applied_on_load() {
    let mut overview = Overview::new(MemSource::new(summary(), records()), GeoRegistry::india(), DashboardConfig::default()).unwrap();
    overview.select_district(&DistrictId::from("MH-MUMBAI"));
    assert!(overview.renderer().frame().is_empty());
    assert!(overview.renderer_mut().drain_commands().is_empty());

    overview.handle_map_event(MapEvent::Loaded);
    assert_eq!(overview.renderer_mut().drain_commands().len(), 1);
}

#[test]
fn svg_snapshot_of_selected_district() {
    let mut overview = overview();
    overview.select_district(&DistrictId::from("DL-SOUTH"));
    settle(&mut overview);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overview.svg");
    overview.renderer().to_svg(&path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains(r#"class="marker Selected" data-id="DL-SOUTH""#));
    assert!(svg.contains("South Delhi"));
}
