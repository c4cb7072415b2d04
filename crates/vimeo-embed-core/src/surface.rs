//! Rendering surface abstraction
//!
//! The embeddable web view is an external collaborator. The core only
//! requires that it can load inline document content, execute injected
//! script, and expose named host-callable handlers reachable from
//! document script. Platform glue (wry, webkit bindings, mobile shells)
//! implements [`RenderingSurface`]; the host component owns the value
//! through an explicit lifecycle slot so late callbacks after teardown
//! are no-ops instead of faults.

use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Handler invoked from document script through the surface's
/// host-callable mechanism. Arguments arrive as JSON values.
pub type HandlerFn = Box<dyn Fn(&[serde_json::Value]) + Send + Sync>;

/// Load-time settings for the inline document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Execute document script
    pub javascript_enabled: bool,
    /// Allow media to play inline instead of forcing native fullscreen
    pub inline_media_playback: bool,
    /// Require a user gesture before media playback starts
    pub media_requires_user_gesture: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            inline_media_playback: true,
            media_requires_user_gesture: false,
        }
    }
}

/// Embeddable view capable of loading inline content, executing injected
/// script, and exposing named host-callable handlers.
///
/// Registered handlers must be reachable from document script as
/// `window.<name>(...)`; how that binding is realized (script message
/// proxies, JS interfaces) is the implementation's concern. Handler
/// dispatch is assumed serialized on the host UI loop.
#[async_trait]
pub trait RenderingSurface: Send {
    /// Register a named host-callable handler
    fn register_handler(&mut self, name: &'static str, handler: HandlerFn);

    /// Load an inline document
    async fn load_document(&mut self, source: &str, options: &LoadOptions) -> Result<()>;

    /// Execute script inside the current document
    async fn evaluate_script(&mut self, source: &str) -> Result<()>;
}

/// Surface lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceLifecycle {
    /// No surface attached yet
    Uninitialized,
    /// Surface attached and live
    Active,
    /// Surface torn down; the handle is gone for good
    Released,
}

impl SurfaceLifecycle {
    /// Check if transition to target state is valid
    pub fn can_transition_to(&self, target: SurfaceLifecycle) -> bool {
        use SurfaceLifecycle::*;
        matches!(
            (self, target),
            (Uninitialized, Active) | (Uninitialized, Released) | (Active, Released)
        )
    }
}

impl fmt::Display for SurfaceLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceLifecycle::Uninitialized => write!(f, "uninitialized"),
            SurfaceLifecycle::Active => write!(f, "active"),
            SurfaceLifecycle::Released => write!(f, "released"),
        }
    }
}

/// Exclusive owner of the live surface value.
///
/// The surface is reachable only while the slot is `Active`; once
/// released it is dropped and every later access returns `None`, which is
/// what makes "ignore late callbacks after teardown" explicit.
#[derive(Debug)]
pub struct SurfaceSlot<S> {
    lifecycle: SurfaceLifecycle,
    surface: Option<S>,
}

impl<S> SurfaceSlot<S> {
    /// Create an empty slot
    pub fn new() -> Self {
        Self {
            lifecycle: SurfaceLifecycle::Uninitialized,
            surface: None,
        }
    }

    /// Current lifecycle state
    pub fn lifecycle(&self) -> SurfaceLifecycle {
        self.lifecycle
    }

    /// Attach the live surface. Valid only from `Uninitialized`.
    pub fn activate(&mut self, surface: S) -> Result<()> {
        if !self.lifecycle.can_transition_to(SurfaceLifecycle::Active) {
            return Err(Error::InvalidLifecycleTransition {
                from: self.lifecycle.to_string(),
                to: SurfaceLifecycle::Active.to_string(),
            });
        }
        self.lifecycle = SurfaceLifecycle::Active;
        self.surface = Some(surface);
        Ok(())
    }

    /// Access the surface while the slot is `Active`
    pub fn active_mut(&mut self) -> Option<&mut S> {
        match self.lifecycle {
            SurfaceLifecycle::Active => self.surface.as_mut(),
            _ => None,
        }
    }

    /// Tear down: drop the surface and seal the slot
    pub fn release(&mut self) -> Option<S> {
        self.lifecycle = SurfaceLifecycle::Released;
        self.surface.take()
    }
}

impl<S> Default for SurfaceSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigation failure reported by the surface, forwarded verbatim to the
/// host's error observer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationError {
    /// The request that failed, when the surface reports it
    pub url: Option<Url>,
    /// Platform error code, when the surface provides one
    pub code: Option<i64>,
    /// Human-readable error description
    pub description: String,
}

/// Pass-through observers for surface lifecycle, for advanced host
/// integration. Every observer is optional.
#[derive(Default)]
pub struct SurfaceObservers {
    /// Surface created and wired
    pub on_surface_created: Option<Box<dyn Fn() + Send + Sync>>,
    /// Navigation started
    pub on_navigation_start: Option<Box<dyn Fn(Option<&Url>) + Send + Sync>>,
    /// Navigation finished (document load stop)
    pub on_navigation_finish: Option<Box<dyn Fn(Option<&Url>) + Send + Sync>>,
    /// Navigation failed; the payload is not intercepted or retried
    pub on_navigation_error: Option<Box<dyn Fn(&NavigationError) + Send + Sync>>,
}

impl SurfaceObservers {
    /// Create an empty observer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the surface-created observer
    pub fn with_surface_created(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_surface_created = Some(Box::new(f));
        self
    }

    /// Set the navigation-start observer
    pub fn with_navigation_start(
        mut self,
        f: impl Fn(Option<&Url>) + Send + Sync + 'static,
    ) -> Self {
        self.on_navigation_start = Some(Box::new(f));
        self
    }

    /// Set the navigation-finish observer
    pub fn with_navigation_finish(
        mut self,
        f: impl Fn(Option<&Url>) + Send + Sync + 'static,
    ) -> Self {
        self.on_navigation_finish = Some(Box::new(f));
        self
    }

    /// Set the navigation-error observer
    pub fn with_navigation_error(
        mut self,
        f: impl Fn(&NavigationError) + Send + Sync + 'static,
    ) -> Self {
        self.on_navigation_error = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for SurfaceObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceObservers")
            .field("on_surface_created", &self.on_surface_created.is_some())
            .field("on_navigation_start", &self.on_navigation_start.is_some())
            .field("on_navigation_finish", &self.on_navigation_finish.is_some())
            .field("on_navigation_error", &self.on_navigation_error.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_transitions() {
        use SurfaceLifecycle::*;

        assert!(Uninitialized.can_transition_to(Active));
        assert!(Uninitialized.can_transition_to(Released));
        assert!(Active.can_transition_to(Released));

        assert!(!Active.can_transition_to(Uninitialized));
        assert!(!Released.can_transition_to(Active));
        assert!(!Released.can_transition_to(Uninitialized));
    }

    #[test]
    fn test_slot_activate_once() {
        let mut slot = SurfaceSlot::new();
        assert_eq!(slot.lifecycle(), SurfaceLifecycle::Uninitialized);
        assert!(slot.active_mut().is_none());

        slot.activate(1u32).unwrap();
        assert_eq!(slot.lifecycle(), SurfaceLifecycle::Active);
        assert_eq!(slot.active_mut(), Some(&mut 1u32));

        let err = slot.activate(2u32).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_LIFECYCLE");
    }

    #[test]
    fn test_slot_release_seals() {
        let mut slot = SurfaceSlot::new();
        slot.activate(7u32).unwrap();
        assert_eq!(slot.release(), Some(7u32));
        assert_eq!(slot.lifecycle(), SurfaceLifecycle::Released);
        assert!(slot.active_mut().is_none());
        // Releasing twice is harmless
        assert_eq!(slot.release(), None);
        // And the slot never goes active again
        assert!(slot.activate(8u32).is_err());
    }
}
