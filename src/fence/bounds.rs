use super::LatLng;
use geo::{coord, Intersects, Rect};
use serde::Serialize;

/// Smallest rectangle covering every included point. Starts out empty.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct BoundingRegion {
    rect: Option<Rect>,
}

impl BoundingRegion {
    pub fn include(&mut self, point: LatLng) {
        let coord = point.coord();
        self.rect = Some(match self.rect {
            Some(rect) => Rect::new(
                coord! { x: rect.min().x.min(coord.x), y: rect.min().y.min(coord.y) },
                coord! { x: rect.max().x.max(coord.x), y: rect.max().y.max(coord.y) },
            ),
            None => Rect::new(coord, coord),
        });
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rect.is_none()
    }

    pub fn south_west(&self) -> Option<LatLng> {
        self.rect.map(|it| it.min().into())
    }

    pub fn north_east(&self) -> Option<LatLng> {
        self.rect.map(|it| it.max().into())
    }

    pub fn center(&self) -> Option<LatLng> {
        self.rect.map(|it| it.center().into())
    }

    /// Boundary points are covered.
    #[cfg(test)]
    pub fn covers(&self, point: LatLng) -> bool {
        match self.rect {
            Some(rect) => rect.intersects(&point.coord()),
            None => false,
        }
    }

    /// `[west, south, east, north]`, the GeoJSON bbox order.
    pub fn bbox(&self) -> Option<Vec<f64>> {
        self.rect
            .map(|it| vec![it.min().x, it.min().y, it.max().x, it.max().y])
    }
}

impl FromIterator<LatLng> for BoundingRegion {
    fn from_iter<T: IntoIterator<Item = LatLng>>(iter: T) -> Self {
        let mut region = BoundingRegion::default();
        for point in iter {
            region.include(point);
        }
        region
    }
}

#[derive(Serialize)]
struct Corners {
    south_west: LatLng,
    north_east: LatLng,
}

impl Serialize for BoundingRegion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (self.south_west(), self.north_east()) {
            (Some(south_west), Some(north_east)) => Corners {
                south_west,
                north_east,
            }
            .serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::BoundingRegion;
    use crate::fence::LatLng;

    #[test]
    fn empty() {
        let region = BoundingRegion::default();
        assert!(region.is_empty());
        assert_eq!(None, region.south_west());
        assert!(!region.covers(LatLng::new(0.0, 0.0)));
    }

    #[test]
    fn single_point() {
        let mut region = BoundingRegion::default();
        region.include(LatLng::new(35.0, 139.0));
        assert_eq!(Some(LatLng::new(35.0, 139.0)), region.south_west());
        assert_eq!(Some(LatLng::new(35.0, 139.0)), region.north_east());
        assert!(region.covers(LatLng::new(35.0, 139.0)));
    }

    #[test]
    fn include() {
        let region: BoundingRegion = [
            LatLng::new(36.0, 139.0),
            LatLng::new(35.0, 140.0),
            LatLng::new(35.5, 139.5),
        ]
        .into_iter()
        .collect();
        assert_eq!(Some(LatLng::new(35.0, 139.0)), region.south_west());
        assert_eq!(Some(LatLng::new(36.0, 140.0)), region.north_east());
        assert_eq!(Some(LatLng::new(35.5, 139.5)), region.center());
        assert!(region.covers(LatLng::new(36.0, 140.0)));
        assert!(!region.covers(LatLng::new(34.9, 139.5)));
    }

    #[test]
    fn bbox() {
        let region: BoundingRegion = [LatLng::new(35.0, 139.0), LatLng::new(36.0, 140.0)]
            .into_iter()
            .collect();
        assert_eq!(Some(vec![139.0, 35.0, 140.0, 36.0]), region.bbox());
    }
}
