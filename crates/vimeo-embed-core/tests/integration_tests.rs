//! Integration tests for Vimeo Embed Core

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use vimeo_embed_core::{
    embed_url, synthesize, BridgeEvent, CallbackSet, Color, EventBridge, HandlerFn, LoadOptions,
    NullOrientationService, Orientation, OrientationService, PlayerConfig, RenderingSurface,
    Result, SurfaceLifecycle, VimeoPlayer, ENTER_FULLSCREEN_HANDLER, EXIT_FULLSCREEN_HANDLER,
    FULLSCREEN_PROBE, VIMEO_EVENT_HANDLER,
};

// =============================================================================
// Test doubles
// =============================================================================

#[derive(Default)]
struct TestSurface {
    handlers: Arc<Mutex<HashMap<&'static str, HandlerFn>>>,
    loads: Arc<Mutex<Vec<String>>>,
    scripts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl RenderingSurface for TestSurface {
    fn register_handler(&mut self, name: &'static str, handler: HandlerFn) {
        self.handlers.lock().unwrap().insert(name, handler);
    }

    async fn load_document(&mut self, source: &str, _options: &LoadOptions) -> Result<()> {
        self.loads.lock().unwrap().push(source.to_string());
        Ok(())
    }

    async fn evaluate_script(&mut self, source: &str) -> Result<()> {
        self.scripts.lock().unwrap().push(source.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingOrientation {
    requests: Mutex<Vec<Vec<Orientation>>>,
}

impl OrientationService for RecordingOrientation {
    fn set_allowed(&self, orientations: &[Orientation]) -> Result<()> {
        self.requests.lock().unwrap().push(orientations.to_vec());
        Ok(())
    }
}

// =============================================================================
// Document Synthesizer
// =============================================================================

#[test]
fn test_documented_example_url() {
    let config = PlayerConfig::new("76979871").unwrap();
    assert_eq!(
        embed_url(&config).as_str(),
        "https://player.vimeo.com/video/76979871?autoplay=false&loop=false&muted=false&title=false&byline=false&portrait=false&badge=false&controls=true&dnt=true"
    );
}

#[test]
fn test_all_flag_combinations_render_once() {
    // Each of the nine parameters appears exactly once, matching its
    // config field, across the full boolean space of a config.
    for bits in 0u16..512 {
        let mut config = PlayerConfig::new("x").unwrap();
        config.autoplay = bits & 1 != 0;
        config.looping = bits & 2 != 0;
        config.muted = bits & 4 != 0;
        config.show_title = bits & 8 != 0;
        config.show_byline = bits & 16 != 0;
        config.show_portrait = bits & 32 != 0;
        config.show_badge = bits & 64 != 0;
        config.show_controls = bits & 128 != 0;
        config.do_not_track = bits & 256 != 0;

        let url = embed_url(&config);
        let expected = [
            ("autoplay", config.autoplay),
            ("loop", config.looping),
            ("muted", config.muted),
            ("title", config.show_title),
            ("byline", config.show_byline),
            ("portrait", config.show_portrait),
            ("badge", config.show_badge),
            ("controls", config.show_controls),
            ("dnt", config.do_not_track),
        ];
        for (param, value) in expected {
            let occurrences: Vec<String> = url
                .query_pairs()
                .filter(|(name, _)| name == param)
                .map(|(_, v)| v.into_owned())
                .collect();
            assert_eq!(occurrences.len(), 1, "{} appears once", param);
            assert_eq!(occurrences[0], if value { "true" } else { "false" });
        }
    }
}

#[test]
fn test_document_determinism() {
    let mut config = PlayerConfig::new("76979871").unwrap();
    config.autoplay = true;
    config.background_color = Color::argb(0xFF, 0xAB, 0xCD, 0xEF);
    let first = synthesize(&config);
    let second = synthesize(&config);
    assert_eq!(first, second);
    assert!(first.contains("background-color: #abcdef"));
}

// =============================================================================
// Event Bridge
// =============================================================================

#[test]
fn test_known_events_map_to_exactly_one_callback() {
    for (raw, expected) in [
        ("play", BridgeEvent::Play),
        ("pause", BridgeEvent::Pause),
        ("ready", BridgeEvent::Ready),
        ("seek", BridgeEvent::Seek),
        ("finish", BridgeEvent::Finish),
    ] {
        assert_eq!(BridgeEvent::parse(raw), expected);

        let hits = Arc::new(Mutex::new(Vec::new()));
        let tag = |name: &'static str| {
            let hits = hits.clone();
            move || hits.lock().unwrap().push(name)
        };
        let callbacks = CallbackSet::new()
            .with_ready(tag("ready"))
            .with_play(tag("play"))
            .with_pause(tag("pause"))
            .with_seek(tag("seek"))
            .with_finish(tag("finish"));

        let bridge = EventBridge::new(Arc::new(callbacks), Arc::new(NullOrientationService));
        bridge.dispatch(BridgeEvent::parse(raw));

        assert_eq!(hits.lock().unwrap().as_slice(), [raw]);
    }
}

#[test]
fn test_unrecognized_event_invokes_nothing() {
    let hits = Arc::new(AtomicUsize::new(0));
    let bump = {
        let hits = hits.clone();
        move || {
            hits.fetch_add(1, Ordering::SeqCst);
        }
    };
    let callbacks = CallbackSet::new()
        .with_ready(bump.clone())
        .with_play(bump.clone())
        .with_pause(bump.clone())
        .with_seek(bump.clone())
        .with_finish(bump);

    let bridge = EventBridge::new(Arc::new(callbacks), Arc::new(NullOrientationService));
    bridge.dispatch(BridgeEvent::parse("volumechange"));
    bridge.dispatch(BridgeEvent::parse("unknown"));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

// =============================================================================
// End-to-end: host component over a test surface
// =============================================================================

#[tokio::test]
async fn test_full_session() {
    let orientation = Arc::new(RecordingOrientation::default());
    let log = Arc::new(Mutex::new(Vec::new()));
    let tag = |name: &'static str| {
        let log = log.clone();
        move || log.lock().unwrap().push(name)
    };
    let callbacks = CallbackSet::new()
        .with_ready(tag("ready"))
        .with_play(tag("play"))
        .with_pause(tag("pause"))
        .with_finish(tag("finish"));

    let config = PlayerConfig::new("76979871").unwrap();
    let mut player = VimeoPlayer::new(config, callbacks, orientation.clone()).unwrap();

    let surface = TestSurface::default();
    let handlers = surface.handlers.clone();
    let loads = surface.loads.clone();
    let scripts = surface.scripts.clone();

    player.attach_surface(surface).await.unwrap();
    player.navigation_finished(None).await.unwrap();

    // The loaded document is the synthesized one, and the probe followed
    assert_eq!(loads.lock().unwrap().len(), 1);
    assert_eq!(loads.lock().unwrap()[0], player.document());
    assert_eq!(scripts.lock().unwrap().as_slice(), [FULLSCREEN_PROBE]);

    // Playback events arrive through the registered handler, in order
    {
        let handlers = handlers.lock().unwrap();
        handlers[VIMEO_EVENT_HANDLER](&[json!("ready")]);
        handlers[VIMEO_EVENT_HANDLER](&[json!("play")]);
        handlers[ENTER_FULLSCREEN_HANDLER](&[]);
        handlers[EXIT_FULLSCREEN_HANDLER](&[]);
        handlers[VIMEO_EVENT_HANDLER](&[json!("pause")]);
        handlers[VIMEO_EVENT_HANDLER](&[json!("playbackratechange")]);
        handlers[VIMEO_EVENT_HANDLER](&[json!("finish")]);
    }

    assert_eq!(
        log.lock().unwrap().as_slice(),
        ["ready", "play", "pause", "finish"]
    );
    assert_eq!(
        orientation.requests.lock().unwrap().as_slice(),
        [
            vec![Orientation::LandscapeRight, Orientation::LandscapeLeft],
            vec![Orientation::PortraitUp, Orientation::PortraitDown],
        ]
    );

    player.release();
    assert_eq!(player.lifecycle(), SurfaceLifecycle::Released);
}

#[tokio::test]
async fn test_release_guards_late_work() {
    let config = PlayerConfig::new("76979871").unwrap();
    let mut player = VimeoPlayer::new(
        config,
        CallbackSet::new(),
        Arc::new(NullOrientationService),
    )
    .unwrap();

    let surface = TestSurface::default();
    let scripts = surface.scripts.clone();
    player.attach_surface(surface).await.unwrap();
    player.release();

    // A redirect's load-stop arriving after teardown injects nothing
    player.navigation_finished(None).await.unwrap();
    assert!(scripts.lock().unwrap().is_empty());
}
