//! Vimeo Embed Core - Embedded Player Bridge
//!
//! This crate provides the core functionality for embedding the hosted
//! Vimeo player inside a host application's view hierarchy:
//! - Document synthesis (configuration -> inline player document)
//! - Event bridging (document script events -> host callbacks)
//! - Orientation locking during fullscreen playback
//! - Rendering-surface lifecycle management
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Vimeo Embed Core                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐     │
//! │  │   Document   │   │    Event     │   │ Orientation  │     │
//! │  │ Synthesizer  │   │    Bridge    │   │   Service    │     │
//! │  └──────┬───────┘   └──────┬───────┘   └──────┬───────┘     │
//! │         │                  │                  │             │
//! │         └──────────────────┼──────────────────┘             │
//! │                            │                                │
//! │                     ┌──────┴──────┐                         │
//! │                     │    Host     │                         │
//! │                     │  Component  │                         │
//! │                     └──────┬──────┘                         │
//! │                            │                                │
//! │                  ┌─────────┴──────────┐                     │
//! │                  │ Rendering Surface  │  (platform glue)    │
//! │                  └────────────────────┘                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rendering surface (a platform web view) and the orientation
//! service are external collaborators, abstracted behind the
//! [`RenderingSurface`] and [`OrientationService`] traits. Platform glue
//! implements both and forwards surface lifecycle notifications to the
//! [`VimeoPlayer`] host component.

pub mod bridge;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod host;
pub mod orientation;
pub mod surface;

pub use bridge::{
    EventBridge, ENTER_FULLSCREEN_HANDLER, EXIT_FULLSCREEN_HANDLER, FULLSCREEN_PROBE,
    VIMEO_EVENT_HANDLER,
};
pub use config::{Color, PlayerConfig};
pub use document::{embed_url, synthesize};
pub use error::{Error, Result};
pub use event::{BridgeEvent, CallbackSet, EventCallback};
pub use host::{PlayerId, VimeoPlayer};
pub use orientation::{
    NullOrientationService, Orientation, OrientationService, FULLSCREEN_ORIENTATIONS,
    INLINE_ORIENTATIONS,
};
pub use surface::{
    HandlerFn, LoadOptions, NavigationError, RenderingSurface, SurfaceLifecycle, SurfaceObservers,
    SurfaceSlot,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the player library with default configuration
pub fn init() {
    tracing::info!(version = VERSION, "Vimeo Embed Core initialized");
}
