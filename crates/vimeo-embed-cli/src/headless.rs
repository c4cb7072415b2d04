//! In-process rendering surface
//!
//! Stands in for a platform web view so event streams can be replayed
//! against a real player without spinning up a browser engine. Handlers
//! registered by the bridge stay reachable through a cloned
//! [`HandlerInvoker`] after the surface value moves into the player.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use vimeo_embed_core::{HandlerFn, LoadOptions, RenderingSurface, Result};

type HandlerRegistry = Arc<Mutex<HashMap<&'static str, HandlerFn>>>;

/// Headless surface: records loads and scripts, executes nothing
#[derive(Default)]
pub struct HeadlessSurface {
    handlers: HandlerRegistry,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for invoking registered handlers the way document script
    /// would, valid after the surface moves into the player
    pub fn invoker(&self) -> HandlerInvoker {
        HandlerInvoker {
            handlers: self.handlers.clone(),
        }
    }
}

#[async_trait]
impl RenderingSurface for HeadlessSurface {
    fn register_handler(&mut self, name: &'static str, handler: HandlerFn) {
        debug!(handler = name, "Handler registered");
        self.handlers
            .lock()
            .expect("handler registry poisoned")
            .insert(name, handler);
    }

    async fn load_document(&mut self, source: &str, options: &LoadOptions) -> Result<()> {
        info!(
            bytes = source.len(),
            javascript = options.javascript_enabled,
            inline_media = options.inline_media_playback,
            "Document loaded (headless)"
        );
        Ok(())
    }

    async fn evaluate_script(&mut self, source: &str) -> Result<()> {
        debug!(bytes = source.len(), "Script evaluated (headless)");
        Ok(())
    }
}

/// Invokes named handlers on a [`HeadlessSurface`]
pub struct HandlerInvoker {
    handlers: HandlerRegistry,
}

impl HandlerInvoker {
    /// Invoke a handler by name; returns false when nothing is
    /// registered under that name
    pub fn invoke(&self, name: &str, args: &[serde_json::Value]) -> bool {
        let handlers = self.handlers.lock().expect("handler registry poisoned");
        match handlers.get(name) {
            Some(handler) => {
                handler(args);
                true
            }
            None => false,
        }
    }
}
