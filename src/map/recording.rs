use super::{Circle, MapSurface, Marker};
use crate::fence::{BoundingRegion, LatLng};
use crate::Result;
use serde::Serialize;

#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Instruction {
    Marker(Marker),
    Circle(Circle),
    ListenLongClicks,
    FitBounds {
        region: BoundingRegion,
        padding_px: u32,
    },
    MoveCamera {
        center: LatLng,
        zoom: f32,
    },
}

/// Keeps every instruction it receives, in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub instructions: Vec<Instruction>,
    pub location: Option<LatLng>,
}

impl RecordingSurface {
    pub fn new(location: Option<LatLng>) -> Self {
        RecordingSurface {
            instructions: vec![],
            location,
        }
    }

    pub fn markers(&self) -> Vec<&Marker> {
        self.instructions
            .iter()
            .filter_map(|it| match it {
                Instruction::Marker(marker) => Some(marker),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<&Circle> {
        self.instructions
            .iter()
            .filter_map(|it| match it {
                Instruction::Circle(circle) => Some(circle),
                _ => None,
            })
            .collect()
    }

    #[cfg(test)]
    pub fn camera_fits(&self) -> Vec<(&BoundingRegion, u32)> {
        self.instructions
            .iter()
            .filter_map(|it| match it {
                Instruction::FitBounds { region, padding_px } => Some((region, *padding_px)),
                _ => None,
            })
            .collect()
    }

    pub fn draw_count(&self) -> usize {
        self.markers().len() + self.circles().len()
    }
}

impl MapSurface for RecordingSurface {
    fn add_marker(&mut self, marker: &Marker) -> Result<()> {
        self.instructions.push(Instruction::Marker(*marker));
        Ok(())
    }

    fn add_circle(&mut self, circle: &Circle) -> Result<()> {
        self.instructions.push(Instruction::Circle(*circle));
        Ok(())
    }

    fn listen_long_clicks(&mut self) -> Result<()> {
        self.instructions.push(Instruction::ListenLongClicks);
        Ok(())
    }

    fn move_camera_to_bounds(&mut self, region: &BoundingRegion, padding_px: u32) -> Result<()> {
        self.instructions.push(Instruction::FitBounds {
            region: *region,
            padding_px,
        });
        Ok(())
    }

    fn move_camera_to(&mut self, center: LatLng, zoom: f32) -> Result<()> {
        self.instructions
            .push(Instruction::MoveCamera { center, zoom });
        Ok(())
    }

    fn last_known_location(&self) -> Option<LatLng> {
        self.location
    }
}

#[cfg(test)]
mod test {
    use super::{Instruction, RecordingSurface};
    use crate::fence::{BoundingRegion, LatLng};
    use crate::map::MapSurface;
    use crate::Result;
    use serde_json::json;

    #[test]
    fn serialize_fit_bounds() -> Result<()> {
        let mut surface = RecordingSurface::default();
        let region: BoundingRegion = [LatLng::new(35.0, 139.0), LatLng::new(36.0, 140.0)]
            .into_iter()
            .collect();
        surface.move_camera_to_bounds(&region, 0)?;
        assert_eq!(
            json!([{
                "type": "fit_bounds",
                "region": {
                    "south_west": {"latitude": 35.0, "longitude": 139.0},
                    "north_east": {"latitude": 36.0, "longitude": 140.0},
                },
                "padding_px": 0,
            }]),
            serde_json::to_value(&surface.instructions)?,
        );
        Ok(())
    }

    #[test]
    fn listen_long_clicks() -> Result<()> {
        let mut surface = RecordingSurface::default();
        surface.listen_long_clicks()?;
        assert_eq!(vec![Instruction::ListenLongClicks], surface.instructions);
        assert_eq!(0, surface.draw_count());
        Ok(())
    }
}
