use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Cli(String),
    IO(std::io::Error),
    SerdeJson(serde_json::Error),
    StaticMap(staticmap::Error),
    MalformedCatalog(String),
    PermissionDenied,
    SurfaceUnavailable,
    InvalidInput(String),
    Generic(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Cli(err) => write!(f, "{}", err),
            Error::IO(err) => err.fmt(f),
            Error::SerdeJson(err) => err.fmt(f),
            Error::StaticMap(err) => write!(f, "{:?}", err),
            Error::MalformedCatalog(err) => write!(f, "Malformed fence catalog: {}", err),
            Error::PermissionDenied => write!(f, "Location permission denied"),
            Error::SurfaceUnavailable => write!(f, "Map surface is not available"),
            Error::InvalidInput(err) => write!(f, "{}", err),
            Error::Generic(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<&str> for Error {
    fn from(str: &str) -> Self {
        Error::Generic(str.to_owned())
    }
}

impl From<String> for Error {
    fn from(str: String) -> Self {
        Error::Generic(str)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerdeJson(error)
    }
}

impl From<staticmap::Error> for Error {
    fn from(error: staticmap::Error) -> Self {
        Error::StaticMap(error)
    }
}
