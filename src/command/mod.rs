use crate::conf::Conf;
use crate::fence::LatLng;
use crate::{Error, Result};
use std::path::PathBuf;

pub mod dump;
pub mod export;
pub mod render;
pub mod style;

/// A leading arg that isn't a number is a fence document path.
pub fn document_arg(args: &[String], conf: Conf) -> (Conf, &[String]) {
    match args.split_first() {
        Some((path, rest)) if number(path).is_err() => (
            Conf {
                document: Some(PathBuf::from(path)),
                ..conf
            },
            rest,
        ),
        _ => (conf, args),
    }
}

pub fn points(args: &[String]) -> Result<Vec<LatLng>> {
    args.chunks(2)
        .map(|pair| match pair {
            [lat, lon] => Ok(LatLng::new(number(lat)?, number(lon)?)),
            _ => Err(Error::Cli("Coordinates must come in lat lon pairs".into())),
        })
        .collect()
}

pub fn number(arg: &str) -> Result<f64> {
    arg.parse()
        .map_err(|_| Error::Cli(format!("Not a number: {arg}")))
}
