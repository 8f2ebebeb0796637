use super::document_arg;
use crate::conf::Conf;
use crate::fence::{export, loader};
use crate::{Error, Result};
use geojson::GeoJson;

pub fn run(args: &[String], conf: Conf) -> Result<()> {
    let (conf, rest) = document_arg(args, conf);
    if !rest.is_empty() {
        return Err(Error::Cli("Usage: export [document]".into()));
    }
    let catalog = loader::load(&loader::configured_document(&conf)?)?;
    let collection = export::to_feature_collection(&catalog.fences);
    println!("{}", GeoJson::from(collection));
    Ok(())
}
