use super::{document_arg, points};
use crate::conf::Conf;
use crate::map::RecordingSurface;
use crate::permission::GrantedGate;
use crate::session::{Event, Session};
use crate::{Error, Result};
use tracing::info;

pub fn run(args: &[String], conf: Conf) -> Result<()> {
    let (conf, rest) = document_arg(args, conf);
    let presses = points(rest)?;
    let mut session = Session::new(GrantedGate, conf);
    session.start()?;
    session.handle(Event::MapReady(RecordingSurface::new(None)))?;
    for point in presses {
        session.handle(Event::LongPress(point))?;
    }
    let surface = session.surface().ok_or(Error::SurfaceUnavailable)?;
    let instructions = surface.instructions.clone();
    info!(
        fences = session.catalog().map(|it| it.fences.len()),
        ad_hoc_fences = session.ad_hoc_fences().len(),
        markers = surface.markers().len(),
        circles = surface.circles().len(),
        drawn = surface.draw_count(),
        instructions = instructions.len(),
        "Dumping map instructions"
    );
    session.destroy();
    println!("{}", serde_json::to_string_pretty(&instructions)?);
    Ok(())
}
