use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::catalog::{pick_wallpapers, CatalogEntry};
use crate::config::Config;
use crate::gesture::{TapClassifier, TouchEvent};
use crate::sampler::SampleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Loaded { walls: Vec<CatalogEntry> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveRequest {
    pub url: String,
    pub author: String,
}

/// State of the wallpaper screen: the picked wallpapers, which one is showing, and whether a save
/// is in flight behind the "please wait" overlay.
pub struct Gallery {
    config: Config,
    classifier: TapClassifier,
    phase: Phase,
    current: usize,
    hud_visible: bool,
}

impl Gallery {
    pub fn new(config: Config) -> Gallery {
        Gallery {
            classifier: TapClassifier::new(config.tap_thresholds()),
            config,
            phase: Phase::Loading,
            current: 0,
            hud_visible: false,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn walls(&self) -> &[CatalogEntry] {
        match &self.phase {
            Phase::Loading => &[],
            Phase::Loaded { walls } => walls,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_wallpaper(&self) -> Option<&CatalogEntry> {
        self.walls().get(self.current)
    }

    pub fn is_hud_visible(&self) -> bool {
        self.hud_visible
    }

    pub fn image_url(&self, wall: &CatalogEntry) -> String {
        wall.image_url(&self.config.image_base_url)
    }

    /// Picks the wallpapers to show from a freshly fetched catalog.
    pub fn load<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        catalog: &[CatalogEntry],
    ) -> Result<&[CatalogEntry], SampleError> {
        debug!("catalog has {} entries", catalog.len());

        let walls = pick_wallpapers(rng, catalog, self.config.num_wallpapers)?;
        info!("picked wallpapers {:?}", walls.iter().map(|w| w.id).collect::<Vec<_>>());

        self.phase = Phase::Loaded { walls };
        self.current = 0;

        Ok(self.walls())
    }

    /// Records the page the carousel settled on.
    pub fn scroll_to(&mut self, index: usize) {
        self.current = index.min(self.walls().len().saturating_sub(1));
    }

    /// Handles a finger-down on the current wallpaper. A double tap starts a save.
    pub fn touch_grant(&mut self, touch: TouchEvent) -> Option<SaveRequest> {
        if self.hud_visible {
            debug!("touch at {}ms ignored while saving", touch.timestamp_ms);
            return None;
        }

        if !self.classifier.classify(touch) {
            return None;
        }

        info!("double tap detected");

        let Some(wall) = self.current_wallpaper() else {
            debug!("nothing to save");
            return None;
        };

        let request = SaveRequest {
            url: self.image_url(wall),
            author: wall.author.clone(),
        };

        self.hud_visible = true;

        Some(request)
    }

    /// Hides the overlay once the platform save returns. Returns false when no save was pending.
    pub fn save_finished(&mut self, result: Result<(), &str>) -> bool {
        if !self.hud_visible {
            warn!("save result arrived with no save in flight");
            return false;
        }

        self.hud_visible = false;

        match result {
            Ok(()) => info!("wallpaper saved"),
            Err(err) => warn!("error saving wallpaper: {err}"),
        }

        true
    }

    /// Throws away the current wallpapers so a new catalog can be loaded.
    pub fn shake(&mut self) {
        info!("shake, reloading wallpapers");

        self.phase = Phase::Loading;
        self.current = 0;
        self.hud_visible = false;
        self.classifier.reset();
    }
}
