use super::document_arg;
use crate::conf::Conf;
use crate::map::StaticMapSurface;
use crate::permission::GrantedGate;
use crate::session::{Event, Session};
use crate::{Error, Result};
use std::{fs, path::PathBuf};
use tracing::info;

const DATA_DIR: &str = ".local/share/visible-geofences";
const OUTPUT_FILE_NAME: &str = "fences.png";

pub fn run(args: &[String], conf: Conf) -> Result<()> {
    let (conf, rest) = document_arg(args, conf);
    if !rest.is_empty() {
        return Err(Error::Cli("Usage: render [document]".into()));
    }
    let output = output_path(&conf)?;
    let surface = StaticMapSurface::new(conf.map_width, conf.map_height, None);
    let mut session = Session::new(GrantedGate, conf);
    session.start()?;
    session.handle(Event::MapReady(surface))?;
    let png = session
        .into_surface()
        .ok_or(Error::SurfaceUnavailable)?
        .encode_png()?;
    fs::write(&output, &png)?;
    info!(path = %output.display(), bytes = png.len(), "Saved fence map");
    Ok(())
}

fn output_path(conf: &Conf) -> Result<PathBuf> {
    if let Some(output) = &conf.output {
        return Ok(output.clone());
    }
    #[allow(deprecated)]
    let data_dir = std::env::home_dir()
        .ok_or("Home directory does not exist")?
        .join(DATA_DIR);
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
    }
    Ok(data_dir.join(OUTPUT_FILE_NAME))
}

#[cfg(test)]
mod test {
    use crate::conf::Conf;
    use crate::Result;
    use std::path::PathBuf;

    #[test]
    fn output_path_from_conf() -> Result<()> {
        let conf = Conf {
            output: Some(PathBuf::from("/tmp/out.png")),
            ..Conf::default()
        };
        assert_eq!(PathBuf::from("/tmp/out.png"), super::output_path(&conf)?);
        Ok(())
    }

    #[test]
    fn extra_args() {
        let args = vec!["fences.json".to_string(), "1".into(), "2".into()];
        assert!(super::run(&args, Conf::default()).is_err());
    }
}
