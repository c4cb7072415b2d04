//! Event bridge between the embedded document and the host
//!
//! Registers the named host-callable handlers with the rendering surface,
//! parses the raw strings those handlers receive into [`BridgeEvent`]s,
//! and dispatches each event to the matching host callback or to the
//! platform orientation service. Dispatch is an exhaustive match over the
//! full variant set so an extension of the vocabulary cannot be dropped
//! silently.

use crate::event::{BridgeEvent, CallbackSet, EventCallback};
use crate::orientation::{
    Orientation, OrientationService, FULLSCREEN_ORIENTATIONS, INLINE_ORIENTATIONS,
};
use crate::surface::RenderingSurface;
use crate::{Error, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Handler the document calls with playback event strings
pub const VIMEO_EVENT_HANDLER: &str = "onVimeoEvent";

/// Handler the fullscreen probe calls when fullscreen is entered
pub const ENTER_FULLSCREEN_HANDLER: &str = "onEnterFullscreen";

/// Handler the fullscreen probe calls when fullscreen is exited
pub const EXIT_FULLSCREEN_HANDLER: &str = "onExitFullscreen";

/// Raw name dispatched when a handler invocation carries no argument
const MISSING_EVENT_NAME: &str = "unknown";

/// Script injected after every navigation finish. The window-scoped flag
/// keeps redirect-driven repeated load-stops from stacking duplicate
/// `fullscreenchange` listeners: the listener attaches at most once per
/// document.
pub const FULLSCREEN_PROBE: &str = r#"(function () {
  if (window.__vimeoFullscreenProbe) { return; }
  window.__vimeoFullscreenProbe = true;
  document.addEventListener('fullscreenchange', function () {
    if (document.fullscreenElement) {
      window.onEnterFullscreen();
    } else {
      window.onExitFullscreen();
    }
  });
})();"#;

/// Bridge between document events and host-level effects
#[derive(Clone)]
pub struct EventBridge {
    callbacks: Arc<CallbackSet>,
    orientation: Arc<dyn OrientationService>,
}

impl EventBridge {
    /// Create a bridge over the host callbacks and the platform
    /// orientation service
    pub fn new(callbacks: Arc<CallbackSet>, orientation: Arc<dyn OrientationService>) -> Self {
        Self {
            callbacks,
            orientation,
        }
    }

    /// Register the three named handlers with a freshly created surface.
    ///
    /// `onVimeoEvent` parses its first argument as the raw event name
    /// (`"unknown"` when absent); the fullscreen handlers take no
    /// arguments. All three are side-effecting and return nothing to the
    /// calling script.
    pub fn attach<S: RenderingSurface + ?Sized>(&self, surface: &mut S) {
        let bridge = self.clone();
        surface.register_handler(
            VIMEO_EVENT_HANDLER,
            Box::new(move |args| {
                let raw = args
                    .first()
                    .and_then(|value| value.as_str())
                    .unwrap_or(MISSING_EVENT_NAME);
                bridge.dispatch(BridgeEvent::parse(raw));
            }),
        );

        let bridge = self.clone();
        surface.register_handler(
            ENTER_FULLSCREEN_HANDLER,
            Box::new(move |_args| bridge.dispatch(BridgeEvent::EnterFullscreen)),
        );

        let bridge = self.clone();
        surface.register_handler(
            EXIT_FULLSCREEN_HANDLER,
            Box::new(move |_args| bridge.dispatch(BridgeEvent::ExitFullscreen)),
        );
    }

    /// Dispatch a single event to its host callback or platform side
    /// effect
    pub fn dispatch(&self, event: BridgeEvent) {
        match event {
            BridgeEvent::Play => self.invoke("play", self.callbacks.on_play.as_ref()),
            BridgeEvent::Pause => self.invoke("pause", self.callbacks.on_pause.as_ref()),
            BridgeEvent::Ready => self.invoke("ready", self.callbacks.on_ready.as_ref()),
            BridgeEvent::Seek => self.invoke("seek", self.callbacks.on_seek.as_ref()),
            BridgeEvent::Finish => self.invoke("finish", self.callbacks.on_finish.as_ref()),
            BridgeEvent::EnterFullscreen => self.restrict(&FULLSCREEN_ORIENTATIONS),
            BridgeEvent::ExitFullscreen => self.restrict(&INLINE_ORIENTATIONS),
            // Leniency policy: the remote vocabulary is not closed
            BridgeEvent::Unknown(name) => {
                debug!(event = %name, "Ignoring unrecognized player event");
            }
        }
    }

    /// Inject the fullscreen probe into the current document
    pub async fn install_fullscreen_probe<S: RenderingSurface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<()> {
        surface
            .evaluate_script(FULLSCREEN_PROBE)
            .await
            .map_err(|e| Error::ScriptInjection(e.to_string()))
    }

    fn invoke(&self, name: &'static str, callback: Option<&EventCallback>) {
        debug!(event = name, "Player event");
        if let Some(callback) = callback {
            callback();
        }
    }

    fn restrict(&self, orientations: &[Orientation]) {
        // Best-effort: the platform may decline
        if let Err(e) = self.orientation.set_allowed(orientations) {
            warn!(error = %e, code = e.error_code(), "Orientation request failed");
        }
    }
}

impl fmt::Debug for EventBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBridge")
            .field("callbacks", &self.callbacks)
            .finish()
    }
}
