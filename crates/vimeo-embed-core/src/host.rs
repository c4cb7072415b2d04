//! Host component owning the rendering-surface lifecycle
//!
//! Coordinates:
//! - Config validation and one-time document synthesis
//! - Bridge wiring when the surface is created
//! - Fullscreen-probe injection after every document load stop
//! - Pass-through of surface lifecycle notifications to the host
//! - Teardown, after which late notifications are guarded no-ops

use crate::bridge::EventBridge;
use crate::config::PlayerConfig;
use crate::document;
use crate::event::CallbackSet;
use crate::orientation::OrientationService;
use crate::surface::{
    LoadOptions, NavigationError, RenderingSurface, SurfaceLifecycle, SurfaceObservers,
    SurfaceSlot,
};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

/// Unique identifier for a player instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host component for one embedded player.
///
/// Owns the surface exclusively through a [`SurfaceSlot`]; platform glue
/// creates the surface, hands it over with [`attach_surface`], and
/// forwards navigation notifications to the `navigation_*` methods. Any
/// notification arriving after [`release`] is a no-op.
///
/// [`attach_surface`]: VimeoPlayer::attach_surface
/// [`release`]: VimeoPlayer::release
pub struct VimeoPlayer<S: RenderingSurface> {
    /// Unique player ID
    id: PlayerId,
    /// Player configuration, immutable for the component's lifetime
    config: PlayerConfig,
    /// Synthesized document, built once at construction
    document: String,
    /// Load settings handed to the surface
    load_options: LoadOptions,
    /// Event bridge
    bridge: EventBridge,
    /// Surface lifecycle slot
    surface: SurfaceSlot<S>,
    /// Pass-through lifecycle observers
    observers: SurfaceObservers,
    /// Lifecycle change broadcaster
    lifecycle_tx: watch::Sender<SurfaceLifecycle>,
}

impl<S: RenderingSurface> VimeoPlayer<S> {
    /// Create a new player.
    ///
    /// Validates the configuration before any document is synthesized;
    /// an empty video identifier is a fatal construction failure.
    pub fn new(
        config: PlayerConfig,
        callbacks: CallbackSet,
        orientation: Arc<dyn OrientationService>,
    ) -> Result<Self> {
        config.validate()?;
        let document = document::synthesize(&config);
        let (lifecycle_tx, _) = watch::channel(SurfaceLifecycle::Uninitialized);
        let id = PlayerId::new();

        info!(player_id = %id, video_id = %config.video_id, "Player created");

        Ok(Self {
            id,
            config,
            document,
            load_options: LoadOptions::default(),
            bridge: EventBridge::new(Arc::new(callbacks), orientation),
            surface: SurfaceSlot::new(),
            observers: SurfaceObservers::default(),
            lifecycle_tx,
        })
    }

    /// Install pass-through surface lifecycle observers
    pub fn with_observers(mut self, observers: SurfaceObservers) -> Self {
        self.observers = observers;
        self
    }

    /// Get player ID
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Get the player configuration
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Get the synthesized document the surface loads
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Get current surface lifecycle state
    pub fn lifecycle(&self) -> SurfaceLifecycle {
        self.surface.lifecycle()
    }

    /// Subscribe to surface lifecycle changes
    pub fn subscribe_lifecycle(&self) -> watch::Receiver<SurfaceLifecycle> {
        self.lifecycle_tx.subscribe()
    }

    /// Wire a freshly created surface and load the player document.
    ///
    /// Registers the bridge's named handlers, takes ownership of the
    /// surface, fires the creation observer, and instructs the surface to
    /// load the synthesized document with script execution and inline
    /// media playback enabled.
    pub async fn attach_surface(&mut self, mut surface: S) -> Result<()> {
        self.bridge.attach(&mut surface);
        self.surface.activate(surface)?;
        let _ = self.lifecycle_tx.send(SurfaceLifecycle::Active);

        info!(player_id = %self.id, "Surface attached");

        if let Some(callback) = &self.observers.on_surface_created {
            callback();
        }

        if let Some(surface) = self.surface.active_mut() {
            surface
                .load_document(&self.document, &self.load_options)
                .await?;
        }

        Ok(())
    }

    /// Navigation started inside the surface; forwarded unmodified
    pub fn navigation_started(&self, url: Option<&Url>) {
        if self.lifecycle() != SurfaceLifecycle::Active {
            debug!(player_id = %self.id, "Late navigation-start notification ignored");
            return;
        }
        if let Some(callback) = &self.observers.on_navigation_start {
            callback(url);
        }
    }

    /// Document finished loading: (re)inject the fullscreen probe, then
    /// forward the notification.
    ///
    /// Called once per load-stop event. Redirect-driven repeated
    /// load-stops re-inject the identical script; its document-scoped
    /// guard keeps the `fullscreenchange` listener from attaching twice.
    pub async fn navigation_finished(&mut self, url: Option<&Url>) -> Result<()> {
        if self.lifecycle() != SurfaceLifecycle::Active {
            debug!(player_id = %self.id, "Late navigation-finish notification ignored");
            return Ok(());
        }

        if let Some(surface) = self.surface.active_mut() {
            self.bridge.install_fullscreen_probe(surface).await?;
        }
        debug!(player_id = %self.id, "Fullscreen probe injected");

        if let Some(callback) = &self.observers.on_navigation_finish {
            callback(url);
        }
        Ok(())
    }

    /// Navigation failed: forwarded verbatim to the error observer.
    ///
    /// The core has no retry or backoff policy; recovery is the host's
    /// responsibility.
    pub fn navigation_failed(&self, error: &NavigationError) {
        if self.lifecycle() != SurfaceLifecycle::Active {
            debug!(player_id = %self.id, "Late navigation-error notification ignored");
            return;
        }
        warn!(
            player_id = %self.id,
            url = ?error.url,
            description = %error.description,
            "Navigation error"
        );
        if let Some(callback) = &self.observers.on_navigation_error {
            callback(error);
        }
    }

    /// Tear down: drop the surface and seal the lifecycle.
    ///
    /// Every notification arriving after this point is a guarded no-op.
    pub fn release(&mut self) {
        drop(self.surface.release());
        let _ = self.lifecycle_tx.send(SurfaceLifecycle::Released);
        info!(player_id = %self.id, "Surface released");
    }
}

impl<S: RenderingSurface> std::fmt::Debug for VimeoPlayer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VimeoPlayer")
            .field("id", &self.id)
            .field("video_id", &self.config.video_id)
            .field("lifecycle", &self.lifecycle())
            .finish()
    }
}
