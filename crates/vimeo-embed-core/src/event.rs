//! Bridge events and host callbacks
//!
//! The remote player's event vocabulary is not contractually closed, so
//! raw names parse into a tagged [`BridgeEvent`] with an explicit
//! `Unknown` variant; dispatch is an exhaustive match downstream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event delivered by the embedded document, parsed from the raw string
/// argument of a host-callable handler invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgeEvent {
    /// Playback started or resumed
    Play,
    /// Playback paused
    Pause,
    /// Player finished loading the video
    Ready,
    /// Playback position jumped
    Seek,
    /// Playback reached the end
    Finish,
    /// Document entered fullscreen presentation
    EnterFullscreen,
    /// Document left fullscreen presentation
    ExitFullscreen,
    /// Anything outside the known vocabulary, kept for diagnostics
    Unknown(String),
}

impl BridgeEvent {
    /// Parse a raw event name as delivered by the surface handler
    pub fn parse(raw: &str) -> Self {
        match raw {
            "play" => BridgeEvent::Play,
            "pause" => BridgeEvent::Pause,
            "ready" => BridgeEvent::Ready,
            "seek" => BridgeEvent::Seek,
            "finish" => BridgeEvent::Finish,
            other => BridgeEvent::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for BridgeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeEvent::Play => write!(f, "play"),
            BridgeEvent::Pause => write!(f, "pause"),
            BridgeEvent::Ready => write!(f, "ready"),
            BridgeEvent::Seek => write!(f, "seek"),
            BridgeEvent::Finish => write!(f, "finish"),
            BridgeEvent::EnterFullscreen => write!(f, "enter_fullscreen"),
            BridgeEvent::ExitFullscreen => write!(f, "exit_fullscreen"),
            BridgeEvent::Unknown(name) => write!(f, "{}", name),
        }
    }
}

/// Host callback for a single player event
pub type EventCallback = Box<dyn Fn() + Send + Sync>;

/// Zero-or-one handler per playback event kind, supplied once at
/// construction. An absent handler makes that event a no-op.
#[derive(Default)]
pub struct CallbackSet {
    /// Invoked when the player finishes loading
    pub on_ready: Option<EventCallback>,
    /// Invoked when playback starts or resumes
    pub on_play: Option<EventCallback>,
    /// Invoked when playback pauses
    pub on_pause: Option<EventCallback>,
    /// Invoked when the playback position jumps
    pub on_seek: Option<EventCallback>,
    /// Invoked when playback reaches the end
    pub on_finish: Option<EventCallback>,
}

impl CallbackSet {
    /// Create an empty callback set (every event a no-op)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ready handler
    pub fn with_ready(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_ready = Some(Box::new(f));
        self
    }

    /// Set the play handler
    pub fn with_play(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_play = Some(Box::new(f));
        self
    }

    /// Set the pause handler
    pub fn with_pause(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_pause = Some(Box::new(f));
        self
    }

    /// Set the seek handler
    pub fn with_seek(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_seek = Some(Box::new(f));
        self
    }

    /// Set the finish handler
    pub fn with_finish(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_finish = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for CallbackSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSet")
            .field("on_ready", &self.on_ready.is_some())
            .field("on_play", &self.on_play.is_some())
            .field("on_pause", &self.on_pause.is_some())
            .field("on_seek", &self.on_seek.is_some())
            .field("on_finish", &self.on_finish.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(BridgeEvent::parse("play"), BridgeEvent::Play);
        assert_eq!(BridgeEvent::parse("pause"), BridgeEvent::Pause);
        assert_eq!(BridgeEvent::parse("ready"), BridgeEvent::Ready);
        assert_eq!(BridgeEvent::parse("seek"), BridgeEvent::Seek);
        assert_eq!(BridgeEvent::parse("finish"), BridgeEvent::Finish);
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            BridgeEvent::parse("buffering"),
            BridgeEvent::Unknown("buffering".to_string())
        );
        // Raw names are case-sensitive wire strings
        assert_eq!(
            BridgeEvent::parse("Play"),
            BridgeEvent::Unknown("Play".to_string())
        );
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["play", "pause", "ready", "seek", "finish"] {
            assert_eq!(BridgeEvent::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn test_callback_set_builders() {
        let set = CallbackSet::new().with_play(|| {}).with_finish(|| {});
        assert!(set.on_play.is_some());
        assert!(set.on_finish.is_some());
        assert!(set.on_ready.is_none());
        assert!(set.on_pause.is_none());
        assert!(set.on_seek.is_none());
    }
}
