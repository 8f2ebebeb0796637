use crate::fence::{BoundingRegion, LatLng, Rgba};
#[cfg(test)]
use crate::fence::FenceRecord;
use crate::Result;
use serde::Serialize;

pub mod recording;
pub mod static_map;
#[cfg(test)]
pub use recording::Instruction;
pub use recording::RecordingSurface;
pub use static_map::StaticMapSurface;

#[derive(Serialize, PartialEq, Debug, Clone, Copy)]
pub struct Marker {
    pub position: LatLng,
    pub hue: f32, // degrees
    pub draggable: bool,
}

#[derive(Serialize, PartialEq, Debug, Clone, Copy)]
pub struct Circle {
    pub center: LatLng,
    pub radius: f64, // meters
    pub fill_color: Rgba,
    pub stroke_color: Rgba,
}

impl Circle {
    #[cfg(test)]
    pub fn fence(&self) -> FenceRecord {
        FenceRecord::new(self.center, self.radius)
    }
}

/// Something that can display markers and circles and move its camera.
/// Long-presses are delivered back to the session as events once
/// `listen_long_clicks` has been called.
pub trait MapSurface {
    fn add_marker(&mut self, marker: &Marker) -> Result<()>;

    fn add_circle(&mut self, circle: &Circle) -> Result<()>;

    fn listen_long_clicks(&mut self) -> Result<()>;

    fn move_camera_to_bounds(&mut self, region: &BoundingRegion, padding_px: u32) -> Result<()>;

    fn move_camera_to(&mut self, center: LatLng, zoom: f32) -> Result<()>;

    fn last_known_location(&self) -> Option<LatLng>;
}
