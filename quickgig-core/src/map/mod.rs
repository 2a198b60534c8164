//! Adapter between the listings and an interactive map widget.
//!
//! The widget itself is an external collaborator that is only
//! accessed through the [`MapProvider`] port. The concrete binding
//! lives at the application boundary.

use quickgig_entities::geo::*;

mod loader;
mod marker;
mod view;

pub use self::{loader::*, marker::*, view::*};

/// Seoul City Hall
pub const DEFAULT_CENTER: MapPoint = MapPoint::from_lat_lng_deg(37.5665, 126.9780);
pub const DEFAULT_ZOOM: u8 = 14;
pub const DEFAULT_MIN_ZOOM: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapEvent {
    /// Click on empty map space (not on a marker).
    Click,
    /// The viewport has settled after panning or zooming.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    pub center: MapPoint,
    pub zoom: u8,
    pub min_zoom: u8,
}

/// Pixel size or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixels {
    pub x: u32,
    pub y: u32,
}

/// Custom HTML content of a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    pub content: String,
    pub size: Pixels,
    pub anchor: Pixels,
    pub z_index: i32,
}

pub type Handler = Box<dyn Fn()>;

/// Port to an interactive map widget.
pub trait MapProvider {
    /// Element the map is rendered into.
    type Container;
    type Map;
    type Marker;
    /// Releases the resize observation when dropped.
    type ResizeGuard;

    fn construct_map(&self, container: &Self::Container, options: &MapOptions) -> Self::Map;

    fn construct_marker(&self, map: &Self::Map, pos: MapPoint, icon: &MarkerIcon) -> Self::Marker;

    fn set_icon(&self, marker: &Self::Marker, icon: &MarkerIcon);

    fn remove_marker(&self, marker: Self::Marker);

    fn pan_to(&self, map: &Self::Map, pos: MapPoint);

    /// The currently visible region.
    fn bounds(&self, map: &Self::Map) -> MapBbox;

    fn subscribe(&self, map: &Self::Map, event: MapEvent, handler: Handler);

    /// A click on a marker must not reach the [`MapEvent::Click`] handlers.
    fn on_marker_click(&self, marker: &Self::Marker, handler: Handler);

    /// Let the widget recompute its layout whenever the container is resized.
    fn observe_resize(&self, map: &Self::Map, container: &Self::Container) -> Self::ResizeGuard;
}
