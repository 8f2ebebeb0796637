use crate::fence::LatLng;
use crate::{Error, Result};
use std::{env, path::PathBuf, str::FromStr};

// Tokyo, used when the surface has no last known location
pub const DEFAULT_LOCATION: LatLng = LatLng {
    latitude: 35.6291,
    longitude: 139.7429,
};

pub struct Conf {
    pub document: Option<PathBuf>,
    pub default_location: LatLng,
    pub camera_padding_px: u32,
    pub initial_zoom: f32,
    pub map_width: u32,
    pub map_height: u32,
    pub output: Option<PathBuf>,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            document: None,
            default_location: DEFAULT_LOCATION,
            camera_padding_px: 0,
            initial_zoom: 16.0,
            map_width: 600,
            map_height: 315,
            output: None,
        }
    }
}

impl Conf {
    pub fn from_env() -> Result<Conf> {
        Conf::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Conf> {
        let default = Conf::default();
        Ok(Conf {
            document: var("GEOFENCES_DOCUMENT").map(PathBuf::from),
            default_location: LatLng::new(
                parse(&var, "GEOFENCES_DEFAULT_LAT", default.default_location.latitude)?,
                parse(&var, "GEOFENCES_DEFAULT_LON", default.default_location.longitude)?,
            ),
            camera_padding_px: parse(&var, "GEOFENCES_CAMERA_PADDING", default.camera_padding_px)?,
            initial_zoom: parse(&var, "GEOFENCES_INITIAL_ZOOM", default.initial_zoom)?,
            map_width: parse(&var, "GEOFENCES_MAP_WIDTH", default.map_width)?,
            map_height: parse(&var, "GEOFENCES_MAP_HEIGHT", default.map_height)?,
            output: var("GEOFENCES_OUTPUT").map(PathBuf::from),
        })
    }
}

fn parse<T: FromStr>(var: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T> {
    match var(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("Invalid value of {name}: {value}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod test {
    use super::{Conf, DEFAULT_LOCATION};
    use crate::{Error, Result};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn defaults() -> Result<()> {
        let conf = Conf::from_vars(|_| None)?;
        assert_eq!(None, conf.document);
        assert_eq!(DEFAULT_LOCATION, conf.default_location);
        assert_eq!(0, conf.camera_padding_px);
        assert_eq!(16.0, conf.initial_zoom);
        assert_eq!((600, 315), (conf.map_width, conf.map_height));
        Ok(())
    }

    #[test]
    fn overrides() -> Result<()> {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("GEOFENCES_DOCUMENT", "/tmp/fences.json"),
            ("GEOFENCES_DEFAULT_LAT", "35.6556"),
            ("GEOFENCES_DEFAULT_LON", " 139.7523 "),
            ("GEOFENCES_CAMERA_PADDING", "24"),
        ]);
        let conf = Conf::from_vars(|name| vars.get(name).map(|it| it.to_string()))?;
        assert_eq!(Some(PathBuf::from("/tmp/fences.json")), conf.document);
        assert_eq!(35.6556, conf.default_location.latitude);
        assert_eq!(139.7523, conf.default_location.longitude);
        assert_eq!(24, conf.camera_padding_px);
        Ok(())
    }

    #[test]
    fn invalid_value() {
        let res = Conf::from_vars(|name| match name {
            "GEOFENCES_MAP_WIDTH" => Some("wide".into()),
            _ => None,
        });
        assert!(matches!(res, Err(Error::InvalidInput(_))));
    }
}
