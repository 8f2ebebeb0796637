use crate::conf::Conf;
use crate::fence::{loader, Catalog, FenceRecord, LatLng};
use crate::map::MapSurface;
use crate::permission::{self, Grant, Permission, PermissionGate, Rationale};
use crate::{Error, Result};
use tracing::{debug, error, info, warn};

pub enum Event<S> {
    PermissionsResult(Vec<Grant>),
    MapReady(S),
    LongPress(LatLng),
}

/// Everything that lives as long as the map screen does. Events arrive one at
/// a time, and after `destroy` they are all ignored.
pub struct Session<S: MapSurface, G: PermissionGate> {
    conf: Conf,
    gate: G,
    surface: Option<S>,
    location_granted: bool,
    map_initialized: bool,
    destroyed: bool,
    catalog: Option<Catalog>,
    ad_hoc_fences: Vec<FenceRecord>,
}

impl<S: MapSurface, G: PermissionGate> Session<S, G> {
    pub fn new(gate: G, conf: Conf) -> Self {
        Session {
            conf,
            gate,
            surface: None,
            location_granted: false,
            map_initialized: false,
            destroyed: false,
            catalog: None,
            ad_hoc_fences: vec![],
        }
    }

    pub fn start(&mut self) -> Result<()> {
        info!("Starting session");
        self.check_permissions()
    }

    pub fn handle(&mut self, event: Event<S>) -> Result<()> {
        if self.destroyed {
            debug!(error = %Error::SurfaceUnavailable, "Ignoring event after teardown");
            return Ok(());
        }
        match event {
            Event::PermissionsResult(grants) => self.on_permissions_result(&grants),
            Event::MapReady(surface) => self.on_map_ready(surface),
            Event::LongPress(point) => self.on_long_press(point),
        }
    }

    pub fn destroy(&mut self) {
        info!(
            ad_hoc_fences = self.ad_hoc_fences.len(),
            "Destroying session"
        );
        self.surface = None;
        self.catalog = None;
        self.ad_hoc_fences.clear();
        self.destroyed = true;
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn ad_hoc_fences(&self) -> &[FenceRecord] {
        &self.ad_hoc_fences
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    #[cfg(test)]
    pub fn gate(&self) -> &G {
        &self.gate
    }

    pub fn into_surface(self) -> Option<S> {
        self.surface
    }

    fn check_permissions(&mut self) -> Result<()> {
        if self.gate.check_granted(&permission::LOCATION) {
            debug!("Location permissions granted");
            self.location_granted = true;
            return self.init_map();
        }
        let rationale = if self.gate.should_show_rationale(Permission::FineLocation) {
            debug!("Showing rationale");
            Some(Rationale::default())
        } else {
            None
        };
        self.gate.request(&permission::LOCATION, rationale.as_ref());
        Ok(())
    }

    fn on_permissions_result(&mut self, grants: &[Grant]) -> Result<()> {
        let granted = permission::all_granted(grants);
        info!(granted, "Got permissions result");
        if granted {
            self.location_granted = true;
            self.init_map()
        } else {
            warn!(error = %Error::PermissionDenied, "Asking again");
            self.check_permissions()
        }
    }

    fn on_map_ready(&mut self, surface: S) -> Result<()> {
        info!("Map is ready");
        self.surface = Some(surface);
        self.init_map()
    }

    fn on_long_press(&mut self, point: LatLng) -> Result<()> {
        let Some(surface) = self.surface.as_mut() else {
            debug!(error = %Error::SurfaceUnavailable, ?point, "Ignoring long press");
            return Ok(());
        };
        let fence = loader::render_ad_hoc(point, surface)?;
        info!(?fence, "Added ad-hoc fence");
        self.ad_hoc_fences.push(fence);
        Ok(())
    }

    fn init_map(&mut self) -> Result<()> {
        if self.map_initialized || !self.location_granted {
            return Ok(());
        }
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        self.map_initialized = true;
        let location = surface
            .last_known_location()
            .unwrap_or(self.conf.default_location);
        info!(?location, "Initializing map");
        surface.listen_long_clicks()?;
        let catalog = match loader::configured_document(&self.conf).and_then(|it| loader::load(&it)) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(%e, "Failed to load fence catalog");
                return Err(e);
            }
        };
        if catalog.fences.is_empty() {
            // nothing to fit
            surface.move_camera_to(location, self.conf.initial_zoom)?;
        } else {
            loader::render(&catalog, self.conf.camera_padding_px, surface)?;
        }
        self.catalog = Some(catalog);
        Ok(())
    }
}
