//! Web Mercator camera used to place markers and the popup in screen space.

use std::f64::consts::PI;

use anyhow::{ensure, Result};
use geo::{Coord, Rect};
use serde::Serialize;

/// Size of one world tile at zoom 0, in pixels (vector-tile convention).
pub const TILE_SIZE: f64 = 512.0;

/// Latitude limit of the Web Mercator projection.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Pixel position relative to the top-left of the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Camera position: geographic centre (lon, lat) and zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: Coord<f64>,
    pub zoom: f64,
}

impl Camera {
    pub fn new(lon: f64, lat: f64, zoom: f64) -> Self {
        Self { center: Coord { x: lon, y: lat }, zoom }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    camera: Camera,
    width: f64,
    height: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, camera: Camera, min_zoom: f64, max_zoom: f64) -> Result<Self> {
        ensure!(width > 0.0 && height > 0.0, "[render] viewport must have a positive size, got {width}x{height}");
        ensure!(min_zoom <= max_zoom, "[render] min zoom {min_zoom} exceeds max zoom {max_zoom}");

        let mut viewport = Self { camera, width, height, min_zoom, max_zoom };
        viewport.set_camera(camera);
        Ok(viewport)
    }

    #[inline] pub fn camera(&self) -> Camera { self.camera }

    #[inline] pub fn width(&self) -> f64 { self.width }

    #[inline] pub fn height(&self) -> f64 { self.height }

    /// Move the camera. Zoom is clamped to the viewport's range.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Camera {
            center: Coord { x: camera.center.x, y: camera.center.y.clamp(-MAX_LATITUDE, MAX_LATITUDE) },
            zoom: camera.zoom.clamp(self.min_zoom, self.max_zoom),
        };
    }

    #[inline] pub fn clamp_zoom(&self, zoom: f64) -> f64 { zoom.clamp(self.min_zoom, self.max_zoom) }

    /// Shift the camera by a pixel offset (drag to the right moves the map east-to-west).
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let center = self.unproject(ScreenPoint { x: self.width / 2.0 + dx, y: self.height / 2.0 + dy });
        self.set_camera(Camera { center, zoom: self.camera.zoom });
    }

    /// Project a geographic coordinate into screen pixels for the current camera.
    pub fn project(&self, coord: Coord<f64>) -> ScreenPoint {
        let (x, y) = world_pixels(coord, self.camera.zoom);
        let (cx, cy) = world_pixels(self.camera.center, self.camera.zoom);
        ScreenPoint {
            x: x - cx + self.width / 2.0,
            y: y - cy + self.height / 2.0,
        }
    }

    /// Inverse of `project`.
    pub fn unproject(&self, point: ScreenPoint) -> Coord<f64> {
        let (cx, cy) = world_pixels(self.camera.center, self.camera.zoom);
        geo_coord(
            point.x - self.width / 2.0 + cx,
            point.y - self.height / 2.0 + cy,
            self.camera.zoom,
        )
    }

    /// Whether a screen point falls on the visible surface.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Geographic bounds of the visible surface.
    pub fn bounds(&self) -> Rect<f64> {
        Rect::new(
            self.unproject(ScreenPoint { x: 0.0, y: self.height }),
            self.unproject(ScreenPoint { x: self.width, y: 0.0 }),
        )
    }
}

/// Web Mercator world pixel coordinates at a zoom level.
fn world_pixels(coord: Coord<f64>, zoom: f64) -> (f64, f64) {
    let scale = TILE_SIZE * 2f64.powf(zoom);
    let lat = coord.y.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (coord.x + 180.0) / 360.0 * scale;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
    (x, y)
}

fn geo_coord(x: f64, y: f64, zoom: f64) -> Coord<f64> {
    let scale = TILE_SIZE * 2f64.powf(zoom);
    let n = PI - 2.0 * PI * y / scale;
    Coord {
        x: x / scale * 360.0 - 180.0,
        y: n.sinh().atan().to_degrees(),
    }
}
