mod color;
mod marker;
mod popup;
mod renderer;
mod scene;
mod svg;
mod viewport;

pub use color::{Hsl, NEUTRAL};
pub use marker::{saturation_label, MarkerDescriptor, MarkerState, MarkerStyle};
pub use popup::{PopupContent, PopupPlacement};
pub use renderer::{FlyTicket, MapCommand, MapEvent, MapOutput, MapRenderer, PopupState, RenderOptions};
pub use scene::{diff, draw_order, SceneChange};
pub use viewport::{Camera, ScreenPoint, Viewport, TILE_SIZE};
