use crate::{Error, Result};
use geo::{coord, Coord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

pub const FIELD_DATA: &str = "data";
const FIELD_LATITUDE: &str = "latitude";
const FIELD_LONGITUDE: &str = "longitude";
const FIELD_RADIUS: &str = "radius";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        LatLng {
            latitude,
            longitude,
        }
    }

    pub fn coord(&self) -> Coord {
        coord! { x: self.longitude, y: self.latitude }
    }
}

impl From<Coord> for LatLng {
    fn from(coord: Coord) -> Self {
        LatLng::new(coord.y, coord.x)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy)]
pub struct FenceRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64, // meters
}

impl FenceRecord {
    pub fn new(center: LatLng, radius: f64) -> Self {
        FenceRecord {
            latitude: center.latitude,
            longitude: center.longitude,
            radius,
        }
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// Parses the `data` collection of a fence document. Every entry has to be
    /// an object with numeric `latitude`, `longitude` and `radius`, otherwise
    /// nothing is returned.
    pub fn parse_document(document: &Value) -> Result<Vec<FenceRecord>> {
        let entries = document
            .get(FIELD_DATA)
            .ok_or_else(|| Error::MalformedCatalog(format!("missing field: {FIELD_DATA}")))?
            .as_array()
            .ok_or_else(|| Error::MalformedCatalog(format!("{FIELD_DATA} is not an array")))?;
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| FenceRecord::parse_entry(index, entry))
            .collect()
    }

    fn parse_entry(index: usize, entry: &Value) -> Result<FenceRecord> {
        if !entry.is_object() {
            return Err(Error::MalformedCatalog(format!(
                "entry {index} is not an object"
            )));
        }
        let field = |name: &str| -> Result<f64> {
            entry.get(name).and_then(Value::as_f64).ok_or_else(|| {
                Error::MalformedCatalog(format!("entry {index} lacks numeric field: {name}"))
            })
        };
        let record = FenceRecord {
            latitude: field(FIELD_LATITUDE)?,
            longitude: field(FIELD_LONGITUDE)?,
            radius: field(FIELD_RADIUS)?,
        };
        if record.radius <= 0.0 {
            warn!(index, radius = record.radius, "Fence radius is not positive");
        }
        Ok(record)
    }

    #[cfg(test)]
    pub fn mock(latitude: f64, longitude: f64, radius: f64) -> FenceRecord {
        FenceRecord {
            latitude,
            longitude,
            radius,
        }
    }
}

#[cfg(test)]
mod test {
    use super::FenceRecord;
    use crate::{Error, Result};
    use serde_json::json;

    #[test]
    fn parse_document() -> Result<()> {
        let document = json!({"data": [
            {"latitude": 35.0, "longitude": 139.0, "radius": 50},
            {"latitude": 36.0, "longitude": 140.0, "radius": 250},
        ]});
        let fences = FenceRecord::parse_document(&document)?;
        assert_eq!(2, fences.len());
        assert_eq!(FenceRecord::mock(35.0, 139.0, 50.0), fences[0]);
        assert_eq!(FenceRecord::mock(36.0, 140.0, 250.0), fences[1]);
        Ok(())
    }

    #[test]
    fn parse_document_ignores_extra_fields() -> Result<()> {
        let document = json!({"version": 2, "data": [
            {"latitude": 35.0, "longitude": 139.0, "radius": 50, "name": "gate"},
        ]});
        assert_eq!(1, FenceRecord::parse_document(&document)?.len());
        Ok(())
    }

    #[test]
    fn parse_empty_document() -> Result<()> {
        let document = json!({"data": []});
        assert!(FenceRecord::parse_document(&document)?.is_empty());
        Ok(())
    }

    #[test]
    fn parse_document_without_data() {
        let document = json!({"fences": []});
        assert!(matches!(
            FenceRecord::parse_document(&document),
            Err(Error::MalformedCatalog(_))
        ));
    }

    #[test]
    fn parse_document_with_data_object() {
        let document = json!({"data": {"latitude": 35.0}});
        assert!(matches!(
            FenceRecord::parse_document(&document),
            Err(Error::MalformedCatalog(_))
        ));
    }

    #[test]
    fn parse_document_with_missing_field() {
        for missing in ["latitude", "longitude", "radius"] {
            let mut entry = json!({"latitude": 35.0, "longitude": 139.0, "radius": 50});
            entry.as_object_mut().unwrap().remove(missing);
            let document = json!({"data": [
                {"latitude": 36.0, "longitude": 140.0, "radius": 250},
                entry,
            ]});
            assert!(matches!(
                FenceRecord::parse_document(&document),
                Err(Error::MalformedCatalog(_))
            ));
        }
    }

    #[test]
    fn parse_document_with_string_field() {
        let document = json!({"data": [
            {"latitude": "35.0", "longitude": 139.0, "radius": 50},
        ]});
        assert!(matches!(
            FenceRecord::parse_document(&document),
            Err(Error::MalformedCatalog(_))
        ));
    }
}
