//! Retained marker scene: frames are diffed so a host only touches changed markers.

use std::collections::{HashMap, HashSet};

use super::marker::MarkerDescriptor;
use crate::registry::DistrictId;

/// One change between two consecutive marker frames.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneChange {
    Added(MarkerDescriptor),
    Updated(MarkerDescriptor),
    Removed(DistrictId),
}

/// Changes turning `prev` into `next`.
/// Additions and updates follow `next` order; removals follow `prev` order and come last.
pub fn diff(prev: &[MarkerDescriptor], next: &[MarkerDescriptor]) -> Vec<SceneChange> {
    let previous = prev.iter()
        .map(|marker| (&marker.id, marker))
        .collect::<HashMap<_, _>>();

    let mut changes = next.iter()
        .filter_map(|marker| match previous.get(&marker.id) {
            None => Some(SceneChange::Added(marker.clone())),
            Some(&old) if old != marker => Some(SceneChange::Updated(marker.clone())),
            Some(_) => None,
        })
        .collect::<Vec<_>>();

    let current = next.iter().map(|marker| &marker.id).collect::<HashSet<_>>();
    changes.extend(prev.iter()
        .filter(|marker| !current.contains(&marker.id))
        .map(|marker| SceneChange::Removed(marker.id.clone())));

    changes
}

/// Markers in paint order: lowest z-index first, ties keep frame order.
pub fn draw_order(frame: &[MarkerDescriptor]) -> Vec<&MarkerDescriptor> {
    let mut ordered = frame.iter().collect::<Vec<_>>();
    ordered.sort_by_key(|marker| marker.style().z_index);
    ordered
}
