use std::collections::HashMap;

use geo::Coord;

use super::{
    marker::{MarkerDescriptor, MarkerState},
    popup::{PopupContent, PopupPlacement},
    scene::{self, SceneChange},
    viewport::{Camera, ScreenPoint, Viewport},
};
use crate::{merge::MergedDistrict, registry::DistrictId};

/// Identifies one fly-to transition. Only the latest ticket may reposition the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlyTicket(u64);

/// Input from the map surface.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// The surface finished initializing.
    Loaded,
    MarkerClicked(DistrictId),
    MarkerEnter(DistrictId),
    MarkerLeave(DistrictId),
    /// Click on the map that did not hit a marker.
    BackgroundClicked,
    PopupClosed,
    ViewDetailsClicked,
    /// The camera moved (pan, zoom, rotate or an animation frame).
    Moved(Camera),
    /// A fly-to transition landed.
    FlyToFinished(FlyTicket),
}

/// Request for the map surface.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    FlyTo { center: Coord<f64>, zoom: f64, duration_ms: u64, ticket: FlyTicket },
}

/// Intent raised by the map for whoever owns the shared selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapOutput {
    Select(DistrictId),
    ViewDetails(DistrictId),
}

/// Popup lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupState {
    Idle,
    /// Fly-to in flight. Repositioning waits for `ticket`; `anchor` is the
    /// click position when the selection came from a marker.
    Selected { district: DistrictId, ticket: FlyTicket, anchor: Option<ScreenPoint> },
    /// Popup follows the marker on every camera move.
    Tracking { district: DistrictId, anchor: ScreenPoint },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub fly_to_zoom: f64,
    pub fly_to_duration_ms: u64,
    pub popup_offset_px: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { fly_to_zoom: 6.5, fly_to_duration_ms: 1000, popup_offset_px: 24.0 }
    }
}

/// Marker and popup view-model for one rendering session.
///
/// Single-threaded: every method runs on the UI event loop.
#[derive(Debug)]
pub struct MapRenderer {
    viewport: Viewport,
    options: RenderOptions,
    districts: Vec<MergedDistrict>,
    index: HashMap<DistrictId, usize>,
    ready: bool,
    selected: Option<DistrictId>,
    pending_selection: Option<DistrictId>, // arrived before the surface was ready
    hovered: Option<DistrictId>,
    popup: PopupState,
    next_ticket: u64,
    committed: Vec<MarkerDescriptor>, // last frame handed to the host
    commands: Vec<MapCommand>,
}

impl MapRenderer {
    pub fn new(viewport: Viewport, options: RenderOptions) -> Self {
        Self {
            viewport,
            options,
            districts: Vec::new(),
            index: HashMap::new(),
            ready: false,
            selected: None,
            pending_selection: None,
            hovered: None,
            popup: PopupState::Idle,
            next_ticket: 0,
            committed: Vec::new(),
            commands: Vec::new(),
        }
    }

    #[inline] pub fn viewport(&self) -> &Viewport { &self.viewport }

    #[inline] pub fn options(&self) -> &RenderOptions { &self.options }

    #[inline] pub fn is_ready(&self) -> bool { self.ready }

    #[inline] pub fn districts(&self) -> &[MergedDistrict] { &self.districts }

    #[inline] pub fn popup_state(&self) -> &PopupState { &self.popup }

    #[inline] pub fn hovered(&self) -> Option<&DistrictId> { self.hovered.as_ref() }

    /// Selected district, including one still waiting for the surface to load.
    pub fn selected(&self) -> Option<&DistrictId> {
        self.selected.as_ref().or(self.pending_selection.as_ref())
    }

    pub fn district(&self, id: &DistrictId) -> Option<&MergedDistrict> {
        self.index.get(id).map(|&i| &self.districts[i])
    }

    /// Replace the rendered districts with a freshly merged collection.
    pub fn set_districts(&mut self, districts: Vec<MergedDistrict>) {
        self.index = districts.iter().enumerate()
            .map(|(i, district)| (district.id.clone(), i))
            .collect();
        self.districts = districts;

        if self.hovered.as_ref().is_some_and(|id| !self.index.contains_key(id)) {
            self.hovered = None;
        }

        let next = match &self.popup {
            PopupState::Idle => PopupState::Idle,
            PopupState::Selected { district, .. } if !self.index.contains_key(district) => PopupState::Idle,
            PopupState::Tracking { district, .. } => match self.anchor_of(district) {
                Some(anchor) => PopupState::Tracking { district: district.clone(), anchor },
                None => PopupState::Idle,
            },
            state => state.clone(),
        };
        self.popup = next;
    }

    /// Sync with the externally owned selection.
    ///
    /// Selecting the current district again only re-confirms the popup position.
    /// Requests made before the surface is ready are applied on `Loaded`.
    pub fn select(&mut self, id: Option<&DistrictId>) {
        let Some(id) = id else {
            self.selected = None;
            self.pending_selection = None;
            self.popup = PopupState::Idle;
            self.cancel_flights();
            return;
        };

        if !self.ready {
            tracing::debug!("[render] surface not ready, deferring selection of {id}");
            self.pending_selection = Some(id.clone());
            return;
        }

        self.apply_selection(id, None);
    }

    /// Feed one surface event through the state machine.
    pub fn handle(&mut self, event: MapEvent) -> Option<MapOutput> {
        match event {
            MapEvent::Loaded => {
                if !self.ready {
                    self.ready = true;
                    if let Some(id) = self.pending_selection.take() {
                        self.apply_selection(&id, None);
                    }
                }
                None
            }
            MapEvent::MarkerClicked(id) => {
                if !self.ready { return None }
                let anchor = self.anchor_of(&id)?;
                self.apply_selection(&id, Some(anchor));
                Some(MapOutput::Select(id))
            }
            MapEvent::MarkerEnter(id) => {
                if self.ready && self.index.contains_key(&id) {
                    self.hovered = Some(id);
                }
                None
            }
            MapEvent::MarkerLeave(id) => {
                if self.hovered.as_ref() == Some(&id) {
                    self.hovered = None;
                }
                None
            }
            MapEvent::BackgroundClicked | MapEvent::PopupClosed => {
                // Local only: the shared selection stays as it is.
                self.popup = PopupState::Idle;
                None
            }
            MapEvent::ViewDetailsClicked => {
                self.popup().map(|placement| MapOutput::ViewDetails(placement.district))
            }
            MapEvent::Moved(camera) => {
                self.viewport.set_camera(camera);
                if let PopupState::Tracking { district, .. } = &self.popup {
                    let next = match self.anchor_of(district) {
                        Some(anchor) => PopupState::Tracking { district: district.clone(), anchor },
                        None => PopupState::Idle,
                    };
                    self.popup = next;
                }
                None
            }
            MapEvent::FlyToFinished(ticket) => {
                let landed = match &self.popup {
                    PopupState::Selected { district, ticket: current, .. } if *current == ticket => Some(district.clone()),
                    _ => None,
                };
                match landed {
                    Some(district) => {
                        self.popup = match self.anchor_of(&district) {
                            Some(anchor) => PopupState::Tracking { district, anchor },
                            None => PopupState::Idle,
                        };
                    }
                    None => tracing::debug!("[render] ignoring superseded fly-to {ticket:?}"),
                }
                None
            }
        }
    }

    /// Popup placement, if the popup is visible.
    pub fn popup(&self) -> Option<PopupPlacement> {
        let (district, anchor) = match &self.popup {
            PopupState::Idle => return None,
            PopupState::Selected { district, anchor, .. } => (district, (*anchor)?),
            PopupState::Tracking { district, anchor } => (district, *anchor),
        };
        Some(PopupPlacement::new(district.clone(), anchor, self.options.popup_offset_px))
    }

    /// Popup card text, if the popup is visible.
    pub fn popup_content(&self) -> Option<PopupContent> {
        let placement = self.popup()?;
        self.district(&placement.district).map(PopupContent::new)
    }

    /// Marker descriptors for the current state, in district order.
    /// Empty until the surface is ready.
    pub fn frame(&self) -> Vec<MarkerDescriptor> {
        if !self.ready { return Vec::new() }

        self.districts.iter()
            .map(|district| {
                let state = MarkerState::resolve(
                    self.selected.as_ref() == Some(&district.id),
                    self.hovered.as_ref() == Some(&district.id),
                );
                MarkerDescriptor::new(district, state)
            })
            .collect()
    }

    /// Diff the current frame against the last committed one and commit it.
    pub fn commit_frame(&mut self) -> Vec<SceneChange> {
        let next = self.frame();
        let changes = scene::diff(&self.committed, &next);
        self.committed = next;
        changes
    }

    /// Take the queued surface commands.
    pub fn drain_commands(&mut self) -> Vec<MapCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Complete every queued command at once, as a headless surface would.
    pub fn settle(&mut self) {
        for command in self.drain_commands() {
            match command {
                MapCommand::FlyTo { center, zoom, ticket, .. } => {
                    self.handle(MapEvent::Moved(Camera { center, zoom }));
                    self.handle(MapEvent::FlyToFinished(ticket));
                }
            }
        }
    }

    /// Tear down the session: remove every marker and drop transient state.
    /// The selection is kept and re-applied when the next session loads.
    pub fn end_session(&mut self) -> Vec<SceneChange> {
        let changes = scene::diff(&self.committed, &[]);
        self.committed.clear();
        self.commands.clear();
        self.ready = false;
        self.hovered = None;
        self.popup = PopupState::Idle;
        if let Some(id) = self.selected.take() {
            self.pending_selection = Some(id);
        }
        changes
    }

    fn apply_selection(&mut self, id: &DistrictId, anchor: Option<ScreenPoint>) {
        let Some(center) = self.district(id).map(|district| district.coordinates) else {
            tracing::warn!("[render] cannot select unknown district {id}");
            return;
        };

        if self.selected.as_ref() == Some(id) {
            self.popup = match &self.popup {
                // Still flying: keep the ticket, show the popup at the click if there was one.
                PopupState::Selected { district, ticket, anchor: pending } if district == id => PopupState::Selected {
                    district: id.clone(),
                    ticket: *ticket,
                    anchor: anchor.or(*pending),
                },
                _ => PopupState::Tracking { district: id.clone(), anchor: self.viewport.project(center) },
            };
            return;
        }

        self.selected = Some(id.clone());
        self.cancel_flights();

        let ticket = FlyTicket(self.next_ticket);
        self.next_ticket += 1;
        self.commands.push(MapCommand::FlyTo {
            center,
            zoom: self.viewport.clamp_zoom(self.options.fly_to_zoom),
            duration_ms: self.options.fly_to_duration_ms,
            ticket,
        });
        self.popup = PopupState::Selected { district: id.clone(), ticket, anchor };
    }

    /// Drop fly-to requests the surface has not picked up yet.
    fn cancel_flights(&mut self) {
        self.commands.retain(|command| !matches!(command, MapCommand::FlyTo { .. }));
    }

    fn anchor_of(&self, id: &DistrictId) -> Option<ScreenPoint> {
        self.district(id).map(|district| self.viewport.project(district.coordinates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        merge::{merge_districts, MergeOptions},
        metrics::MetricRecord,
        registry::GeoDistrict,
    };

    fn id(s: &str) -> DistrictId { DistrictId::from(s) }

    fn renderer() -> MapRenderer {
        let registry = vec![
            GeoDistrict::new("DL-SOUTH", "South Delhi", "Delhi", "DL", 77.2090, 28.5355),
            GeoDistrict::new("LA-LEH", "Leh", "Ladakh", "LA", 77.5771, 34.1526),
            GeoDistrict::new("TN-CHENNAI", "Chennai", "Tamil Nadu", "TN", 80.2707, 13.0827),
        ];
        let records = vec![MetricRecord::new("South Delhi", "Delhi", 92.3, "High")];
        let viewport = Viewport::new(1200.0, 800.0, Camera::new(82.8, 22.5, 4.2), 3.0, 10.0).unwrap();

        let mut renderer = MapRenderer::new(viewport, RenderOptions::default());
        renderer.set_districts(merge_districts(&registry, &records, &MergeOptions::default()));
        renderer
    }

    fn loaded() -> MapRenderer {
        let mut renderer = renderer();
        renderer.handle(MapEvent::Loaded);
        renderer
    }

    fn fly_ticket(commands: &[MapCommand]) -> FlyTicket {
        match commands.last() {
            Some(MapCommand::FlyTo { ticket, .. }) => *ticket,
            None => panic!("expected a fly-to command"),
        }
    }

    #[test]
    fn no_markers_before_load() {
        let mut renderer = renderer();
        assert!(renderer.frame().is_empty());
        assert!(renderer.commit_frame().is_empty());

        renderer.handle(MapEvent::Loaded);
        assert_eq!(renderer.commit_frame().len(), 3);
    }

    #[test]
    fn marker_label_and_state() {
        let renderer = loaded();
        let frame = renderer.frame();
        assert_eq!(frame[0].label, "92%");
        assert_eq!(frame[1].label, "0%");
        assert!(frame.iter().all(|marker| marker.state == MarkerState::Default));
    }

    #[test]
    fn selection_before_load_is_honored_after_load() {
        let mut renderer = renderer();
        renderer.select(Some(&id("LA-LEH")));
        assert!(renderer.drain_commands().is_empty());
        assert_eq!(renderer.selected(), Some(&id("LA-LEH")));

        renderer.handle(MapEvent::Loaded);
        let commands = renderer.drain_commands();
        assert_eq!(commands.len(), 1);
        match &commands[0] {
            MapCommand::FlyTo { center, zoom, .. } => {
                assert_eq!(*center, Coord { x: 77.5771, y: 34.1526 });
                assert_eq!(*zoom, 6.5);
            }
        }
        assert!(matches!(renderer.popup_state(), PopupState::Selected { district, .. } if *district == id("LA-LEH")));
    }

    #[test]
    fn popup_waits_for_fly_to_then_tracks() {
        let mut renderer = loaded();
        renderer.select(Some(&id("LA-LEH")));
        let ticket = fly_ticket(&renderer.drain_commands());

        // External selection: no popup until the flight lands.
        assert!(renderer.popup().is_none());

        // Moves during the flight do not reposition.
        renderer.handle(MapEvent::Moved(Camera::new(80.0, 30.0, 5.0)));
        assert!(renderer.popup().is_none());

        renderer.handle(MapEvent::Moved(Camera::new(77.5771, 34.1526, 6.5)));
        renderer.handle(MapEvent::FlyToFinished(ticket));
        let placement = renderer.popup().unwrap();
        assert!((placement.anchor.x - 600.0).abs() < 1e-6);
        assert!((placement.anchor.y - 400.0).abs() < 1e-6);
        assert!((placement.position.y - 376.0).abs() < 1e-6);

        // Tracking follows the camera.
        renderer.handle(MapEvent::Moved(Camera::new(78.0, 34.1526, 6.5)));
        let moved = renderer.popup().unwrap();
        assert!(moved.anchor.x < placement.anchor.x);
    }

    #[test]
    fn newer_selection_supersedes_pending_reposition() {
        let mut renderer = loaded();
        renderer.select(Some(&id("LA-LEH")));
        let first = fly_ticket(&renderer.drain_commands());
        renderer.select(Some(&id("TN-CHENNAI")));
        let second = fly_ticket(&renderer.drain_commands());
        assert_ne!(first, second);

        renderer.handle(MapEvent::FlyToFinished(first));
        assert!(renderer.popup().is_none());

        renderer.handle(MapEvent::FlyToFinished(second));
        assert_eq!(renderer.popup().unwrap().district, id("TN-CHENNAI"));
    }

    #[test]
    fn undispatched_flights_do_not_stack() {
        let mut renderer = loaded();
        renderer.select(Some(&id("LA-LEH")));
        renderer.select(Some(&id("TN-CHENNAI")));
        let commands = renderer.drain_commands();
        assert_eq!(commands.len(), 1);
        assert!(matches!(&commands[0], MapCommand::FlyTo { center, .. } if center.x == 80.2707));
    }

    #[test]
    fn marker_click_shows_popup_immediately_and_reports_selection() {
        let mut renderer = loaded();
        let output = renderer.handle(MapEvent::MarkerClicked(id("DL-SOUTH")));
        assert_eq!(output, Some(MapOutput::Select(id("DL-SOUTH"))));
        assert_eq!(renderer.popup().unwrap().district, id("DL-SOUTH"));
        assert_eq!(renderer.drain_commands().len(), 1);

        // The owner echoing the selection back is a no-op.
        renderer.select(Some(&id("DL-SOUTH")));
        assert!(renderer.drain_commands().is_empty());
    }

    #[test]
    fn background_click_hides_popup_but_keeps_selection() {
        let mut renderer = loaded();
        renderer.handle(MapEvent::MarkerClicked(id("DL-SOUTH")));
        renderer.settle();
        assert!(renderer.popup().is_some());

        renderer.handle(MapEvent::BackgroundClicked);
        assert!(renderer.popup().is_none());
        assert_eq!(renderer.popup_state(), &PopupState::Idle);
        assert_eq!(renderer.selected(), Some(&id("DL-SOUTH")));
        assert_eq!(renderer.frame()[0].state, MarkerState::Selected);

        // Re-selecting the same district re-shows the popup without another flight.
        renderer.select(Some(&id("DL-SOUTH")));
        assert!(renderer.drain_commands().is_empty());
        assert_eq!(renderer.popup().unwrap().district, id("DL-SOUTH"));
    }

    #[test]
    fn marker_click_during_flight_shows_popup_without_new_flight() {
        let mut renderer = loaded();
        renderer.select(Some(&id("LA-LEH")));
        let ticket = fly_ticket(&renderer.drain_commands());
        assert!(renderer.popup().is_none());

        let output = renderer.handle(MapEvent::MarkerClicked(id("LA-LEH")));
        assert_eq!(output, Some(MapOutput::Select(id("LA-LEH"))));
        assert!(renderer.drain_commands().is_empty());
        assert_eq!(renderer.popup().unwrap().district, id("LA-LEH"));

        // The original flight still completes the transition to tracking.
        renderer.handle(MapEvent::Moved(Camera::new(77.5771, 34.1526, 6.5)));
        renderer.handle(MapEvent::FlyToFinished(ticket));
        assert!(matches!(renderer.popup_state(), PopupState::Tracking { district, .. } if *district == id("LA-LEH")));
    }

    #[test]
    fn closing_mid_flight_stays_closed_after_landing() {
        let mut renderer = loaded();
        renderer.select(Some(&id("LA-LEH")));
        let ticket = fly_ticket(&renderer.drain_commands());
        renderer.handle(MapEvent::PopupClosed);
        renderer.handle(MapEvent::FlyToFinished(ticket));
        assert!(renderer.popup().is_none());
    }

    #[test]
    fn hover_is_transient_and_never_overrides_selection() {
        let mut renderer = loaded();
        renderer.handle(MapEvent::MarkerEnter(id("LA-LEH")));
        assert_eq!(renderer.frame()[1].state, MarkerState::Hovered);
        renderer.handle(MapEvent::MarkerLeave(id("LA-LEH")));
        assert_eq!(renderer.frame()[1].state, MarkerState::Default);

        renderer.select(Some(&id("DL-SOUTH")));
        renderer.handle(MapEvent::MarkerEnter(id("DL-SOUTH")));
        assert_eq!(renderer.frame()[0].state, MarkerState::Selected);
        renderer.handle(MapEvent::MarkerLeave(id("DL-SOUTH")));
        assert_eq!(renderer.frame()[0].state, MarkerState::Selected);
    }

    #[test]
    fn scene_changes_only_touch_affected_markers() {
        let mut renderer = loaded();
        renderer.commit_frame();

        renderer.handle(MapEvent::MarkerEnter(id("TN-CHENNAI")));
        let changes = renderer.commit_frame();
        assert_eq!(changes.len(), 1);
        assert!(matches!(&changes[0], SceneChange::Updated(marker) if marker.id == id("TN-CHENNAI")));
    }

    #[test]
    fn view_details_requires_visible_popup() {
        let mut renderer = loaded();
        assert_eq!(renderer.handle(MapEvent::ViewDetailsClicked), None);

        renderer.handle(MapEvent::MarkerClicked(id("DL-SOUTH")));
        assert_eq!(renderer.handle(MapEvent::ViewDetailsClicked), Some(MapOutput::ViewDetails(id("DL-SOUTH"))));
        assert_eq!(renderer.popup_content().unwrap().name, "South Delhi");
    }

    #[test]
    fn unknown_district_selection_is_ignored() {
        let mut renderer = loaded();
        renderer.select(Some(&id("XX-NOWHERE")));
        assert!(renderer.drain_commands().is_empty());
        assert_eq!(renderer.handle(MapEvent::MarkerClicked(id("XX-NOWHERE"))), None);
    }

    #[test]
    fn end_session_removes_markers_and_replays_selection() {
        let mut renderer = loaded();
        renderer.commit_frame();
        renderer.select(Some(&id("LA-LEH")));
        renderer.settle();

        let changes = renderer.end_session();
        assert_eq!(changes.len(), 3);
        assert!(changes.iter().all(|change| matches!(change, SceneChange::Removed(_))));
        assert!(renderer.frame().is_empty());

        renderer.handle(MapEvent::Loaded);
        assert_eq!(renderer.drain_commands().len(), 1);
    }

    #[test]
    fn merge_refresh_keeps_tracking_popup() {
        let mut renderer = loaded();
        renderer.handle(MapEvent::MarkerClicked(id("DL-SOUTH")));
        renderer.settle();

        let refreshed = renderer.districts().to_vec();
        renderer.set_districts(refreshed);
        assert_eq!(renderer.popup().unwrap().district, id("DL-SOUTH"));

        renderer.set_districts(Vec::new());
        assert!(renderer.popup().is_none());
    }
}
