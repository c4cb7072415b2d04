//! CLI command implementations

use crate::headless::HeadlessSurface;
use crate::PlayerFlags;
use std::path::PathBuf;
use std::sync::Arc;
use vimeo_embed_core::{
    embed_url, synthesize, CallbackSet, Color, Orientation, OrientationService, PlayerConfig,
    VimeoPlayer, ENTER_FULLSCREEN_HANDLER, EXIT_FULLSCREEN_HANDLER, VIMEO_EVENT_HANDLER,
};

/// Build a player configuration from CLI flags
fn build_config(video_id: &str, flags: &PlayerFlags) -> anyhow::Result<PlayerConfig> {
    let mut config = PlayerConfig::new(video_id)?;
    config.autoplay = flags.autoplay;
    config.looping = flags.looping;
    config.muted = flags.muted;
    config.show_title = flags.title;
    config.show_byline = flags.byline;
    config.show_portrait = flags.portrait;
    config.show_badge = flags.badge;
    config.show_controls = !flags.no_controls;
    config.do_not_track = !flags.no_dnt;
    if let Some(literal) = &flags.background {
        config.background_color = Color::from_hex(literal)?;
    }
    Ok(config)
}

/// Render the synthesized player document
pub fn render(video_id: &str, flags: &PlayerFlags, output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = build_config(video_id, flags)?;
    let document = synthesize(&config);

    match output {
        Some(path) => {
            std::fs::write(&path, &document)?;
            println!("Wrote {} bytes to {}", document.len(), path.display());
        }
        None => print!("{}", document),
    }

    Ok(())
}

/// Print the canonical embed URL
pub fn url(video_id: &str, flags: &PlayerFlags, json: bool) -> anyhow::Result<()> {
    let config = build_config(video_id, flags)?;
    let url = embed_url(&config);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "video_id": config.video_id,
                "url": url.as_str(),
            })
        );
    } else {
        println!("{}", url);
    }

    Ok(())
}

/// Orientation service that announces each request on stdout
struct AnnouncingOrientation;

impl OrientationService for AnnouncingOrientation {
    fn set_allowed(&self, orientations: &[Orientation]) -> vimeo_embed_core::Result<()> {
        let names: Vec<String> = orientations.iter().map(|o| o.to_string()).collect();
        println!("orientation: [{}]", names.join(", "));
        Ok(())
    }
}

/// Replay raw event names through a headless surface
pub async fn replay(
    video_id: &str,
    flags: &PlayerFlags,
    events: &[String],
    fullscreen: bool,
) -> anyhow::Result<()> {
    let config = build_config(video_id, flags)?;
    let frame_url = embed_url(&config);

    let tag = |name: &'static str| move || println!("callback: {}", name);
    let callbacks = CallbackSet::new()
        .with_ready(tag("ready"))
        .with_play(tag("play"))
        .with_pause(tag("pause"))
        .with_seek(tag("seek"))
        .with_finish(tag("finish"));

    let mut player = VimeoPlayer::new(config, callbacks, Arc::new(AnnouncingOrientation))?;

    let surface = HeadlessSurface::new();
    let invoker = surface.invoker();

    player.attach_surface(surface).await?;
    // Simulate the document's load stop so the fullscreen probe lands
    player.navigation_started(Some(&frame_url));
    player.navigation_finished(Some(&frame_url)).await?;

    if fullscreen {
        invoker.invoke(ENTER_FULLSCREEN_HANDLER, &[]);
    }

    for raw in events {
        println!("event: {}", raw);
        invoker.invoke(VIMEO_EVENT_HANDLER, &[serde_json::json!(raw)]);
    }

    if fullscreen {
        invoker.invoke(EXIT_FULLSCREEN_HANDLER, &[]);
    }

    player.release();

    Ok(())
}
