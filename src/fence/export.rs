use super::{BoundingRegion, DisplayStyle, FenceRecord};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue};

pub fn to_feature_collection(fences: &[FenceRecord]) -> FeatureCollection {
    let region: BoundingRegion = fences.iter().map(FenceRecord::center).collect();
    FeatureCollection {
        bbox: region.bbox(),
        features: fences.iter().map(to_feature).collect(),
        foreign_members: None,
    }
}

fn to_feature(fence: &FenceRecord) -> Feature {
    let style = DisplayStyle::of(fence.radius);
    let mut properties = JsonObject::new();
    properties.insert("radius".into(), JsonValue::from(fence.radius));
    properties.insert("tier".into(), JsonValue::from(style.tier.to_string()));
    properties.insert("marker_hue".into(), JsonValue::from(style.marker_hue));
    properties.insert("fill_color".into(), JsonValue::from(style.fill_color.hex()));
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::Point(vec![
            fence.longitude,
            fence.latitude,
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
