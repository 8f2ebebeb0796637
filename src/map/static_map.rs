use super::{Circle, MapSurface, Marker};
use crate::fence::{BoundingRegion, LatLng, Rgba};
use crate::Result;
use staticmap::{
    tools::{CircleBuilder, Color},
    StaticMapBuilder,
};
use std::f64::consts::PI;
use tracing::{debug, info};

const TILE_SIZE: f64 = 256.0;
const MAX_ZOOM: u8 = 17;
const MARKER_RADIUS_PX: f32 = 6.0;
const EARTH_METERS_PER_PIXEL_AT_ZOOM_0: f64 = 156_543.033_92;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Camera {
    center: LatLng,
    zoom: u8,
}

/// Renders fences into a PNG snapshot. Circles are kept in meters until the
/// camera is known, since their pixel size depends on the zoom level.
pub struct StaticMapSurface {
    width: u32,
    height: u32,
    location: Option<LatLng>,
    markers: Vec<Marker>,
    circles: Vec<Circle>,
    camera: Option<Camera>,
}

impl StaticMapSurface {
    pub fn new(width: u32, height: u32, location: Option<LatLng>) -> Self {
        StaticMapSurface {
            width,
            height,
            location,
            markers: vec![],
            circles: vec![],
            camera: None,
        }
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let camera = match self.camera {
            Some(camera) => camera,
            None => {
                let region: BoundingRegion = self
                    .markers
                    .iter()
                    .map(|it| it.position)
                    .chain(self.circles.iter().map(|it| it.center))
                    .collect();
                fit(&region, self.width, self.height, 0)
                    .ok_or("Nothing to render and no camera position set")?
            }
        };
        info!(
            markers = self.markers.len(),
            circles = self.circles.len(),
            zoom = camera.zoom,
            "Rendering static map",
        );
        let mut map = StaticMapBuilder::default()
            .width(self.width)
            .height(self.height)
            .zoom(camera.zoom)
            .lat_center(camera.center.latitude)
            .lon_center(camera.center.longitude)
            .build()?;
        for circle in &self.circles {
            let radius_px = circle.radius / meters_per_pixel(circle.center.latitude, camera.zoom);
            map.add_tool(
                CircleBuilder::new()
                    .lat_coordinate(circle.center.latitude)
                    .lon_coordinate(circle.center.longitude)
                    .color(color(circle.fill_color))
                    .radius(radius_px as f32)
                    .build()?,
            );
        }
        for marker in &self.markers {
            map.add_tool(
                CircleBuilder::new()
                    .lat_coordinate(marker.position.latitude)
                    .lon_coordinate(marker.position.longitude)
                    .color(color(Rgba::from_hue(marker.hue)))
                    .radius(MARKER_RADIUS_PX)
                    .build()?,
            );
        }
        Ok(map.encode_png()?)
    }
}

impl MapSurface for StaticMapSurface {
    fn add_marker(&mut self, marker: &Marker) -> Result<()> {
        self.markers.push(*marker);
        Ok(())
    }

    fn add_circle(&mut self, circle: &Circle) -> Result<()> {
        self.circles.push(*circle);
        Ok(())
    }

    fn listen_long_clicks(&mut self) -> Result<()> {
        debug!("Static maps can't be long-pressed");
        Ok(())
    }

    fn move_camera_to_bounds(&mut self, region: &BoundingRegion, padding_px: u32) -> Result<()> {
        let camera = fit(region, self.width, self.height, padding_px)
            .ok_or("Can't fit the camera to an empty region")?;
        debug!(?camera, "Camera fitted to bounds");
        self.camera = Some(camera);
        Ok(())
    }

    fn move_camera_to(&mut self, center: LatLng, zoom: f32) -> Result<()> {
        self.camera = Some(Camera {
            center,
            zoom: (zoom.max(0.0) as u8).min(MAX_ZOOM),
        });
        Ok(())
    }

    fn last_known_location(&self) -> Option<LatLng> {
        self.location
    }
}

fn color(rgba: Rgba) -> Color {
    Color::new(true, rgba.r, rgba.g, rgba.b, rgba.a)
}

fn meters_per_pixel(latitude: f64, zoom: u8) -> f64 {
    EARTH_METERS_PER_PIXEL_AT_ZOOM_0 * latitude.to_radians().cos() / 2f64.powi(zoom as i32)
}

// Web Mercator, both axes normalized to 0..1
fn project_x(longitude: f64) -> f64 {
    (longitude + 180.0) / 360.0
}

fn project_y(latitude: f64) -> f64 {
    let lat = latitude.to_radians();
    (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0
}

fn unproject_y(y: f64) -> f64 {
    (PI * (1.0 - 2.0 * y)).sinh().atan().to_degrees()
}

/// Largest zoom at which the whole region fits into the image minus padding.
fn fit(region: &BoundingRegion, width: u32, height: u32, padding_px: u32) -> Option<Camera> {
    let south_west = region.south_west()?;
    let north_east = region.north_east()?;
    let min_x = project_x(south_west.longitude);
    let max_x = project_x(north_east.longitude);
    let min_y = project_y(north_east.latitude);
    let max_y = project_y(south_west.latitude);
    let available_w = width.saturating_sub(padding_px.saturating_mul(2)).max(1) as f64;
    let available_h = height.saturating_sub(padding_px.saturating_mul(2)).max(1) as f64;
    let zoom_for = |span: f64, available: f64| -> f64 {
        if span <= 0.0 {
            MAX_ZOOM as f64
        } else {
            (available / (span * TILE_SIZE)).log2()
        }
    };
    let zoom = zoom_for(max_x - min_x, available_w)
        .min(zoom_for(max_y - min_y, available_h))
        .floor()
        .clamp(0.0, MAX_ZOOM as f64) as u8;
    let center = LatLng::new(
        unproject_y((min_y + max_y) / 2.0),
        region.center()?.longitude,
    );
    Some(Camera { center, zoom })
}
