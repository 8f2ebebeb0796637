use super::{BoundingRegion, DisplayStyle, FenceRecord, LatLng, Tier};
use crate::conf::Conf;
use crate::map::{Circle, MapSurface, Marker};
use crate::Result;
use include_dir::include_dir;
use include_dir::Dir;
use serde_json::Value;
use std::{fs, path::Path, time::Instant};
use tracing::{debug, info};

static RAW_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/raw");

const BUNDLED_DOCUMENT: &str = "fences.json";

pub const AD_HOC_RADIUS: f64 = 100.0;

/// Fences in document order, along with the region covering their centers.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Catalog {
    pub fences: Vec<FenceRecord>,
    pub region: BoundingRegion,
}

pub fn bundled_document() -> Result<Value> {
    let file = RAW_DIR
        .get_file(BUNDLED_DOCUMENT)
        .ok_or("Bundled fence document is missing")?;
    Ok(serde_json::from_slice(file.contents())?)
}

pub fn read_document(path: &Path) -> Result<Value> {
    debug!(path = %path.display(), "Reading fence document");
    Ok(serde_json::from_slice(&fs::read(path)?)?)
}

pub fn configured_document(conf: &Conf) -> Result<Value> {
    match &conf.document {
        Some(path) => read_document(path),
        None => bundled_document(),
    }
}

/// All or nothing: a single bad entry fails the whole catalog.
pub fn load(document: &Value) -> Result<Catalog> {
    let start = Instant::now();
    let fences = FenceRecord::parse_document(document)?;
    let region = fences.iter().map(FenceRecord::center).collect();
    let time_ms = start.elapsed().as_millis();
    info!(
        count = fences.len(),
        time_ms,
        "Loaded fence catalog ({}) in {} ms",
        fences.len(),
        time_ms,
    );
    Ok(Catalog { fences, region })
}

/// Draws every fence in document order, then fits the camera once.
pub fn render(catalog: &Catalog, padding_px: u32, surface: &mut impl MapSurface) -> Result<()> {
    for fence in &catalog.fences {
        render_fence(fence, DisplayStyle::of(fence.radius), surface)?;
    }
    surface.move_camera_to_bounds(&catalog.region, padding_px)
}

pub fn render_fence(
    fence: &FenceRecord,
    style: DisplayStyle,
    surface: &mut impl MapSurface,
) -> Result<()> {
    debug!(?fence, tier = %style.tier, "Drawing fence");
    surface.add_marker(&Marker {
        position: fence.center(),
        hue: style.marker_hue,
        draggable: true,
    })?;
    surface.add_circle(&Circle {
        center: fence.center(),
        radius: fence.radius,
        fill_color: style.fill_color,
        stroke_color: style.stroke_color,
    })
}

/// Long-press fences always get the smallest tier, whatever the radius.
pub fn render_ad_hoc(point: LatLng, surface: &mut impl MapSurface) -> Result<FenceRecord> {
    let fence = FenceRecord::new(point, AD_HOC_RADIUS);
    render_fence(&fence, DisplayStyle::from(Tier::Red), surface)?;
    Ok(fence)
}
