//! Document synthesizer
//!
//! Pure translation of a [`PlayerConfig`] into the inline document the
//! rendering surface loads: one full-bleed iframe pointed at the hosted
//! player plus the script wiring that reports playback events back
//! through the surface's host-callable handler. Deterministic - the same
//! configuration yields a byte-identical document. Nothing here touches
//! the network; the document pulls the remote control library only once
//! the surface executes it.

use crate::bridge::VIMEO_EVENT_HANDLER;
use crate::config::PlayerConfig;
use url::Url;

/// Canonical watch URL base for the hosted player
pub const VIMEO_PLAYER_BASE: &str = "https://player.vimeo.com/video";

/// Remote player control library
pub const VIMEO_PLAYER_API: &str = "https://player.vimeo.com/api/player.js";

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Build the canonical embed URL for the configured video.
///
/// The nine query parameters appear exactly once each, in a fixed order,
/// with the lowercase string form of the corresponding boolean.
pub fn embed_url(config: &PlayerConfig) -> Url {
    let mut url = Url::parse(VIMEO_PLAYER_BASE).expect("player base URL is valid");
    url.path_segments_mut()
        .expect("player base URL has a path")
        .push(&config.video_id);
    url.query_pairs_mut()
        .append_pair("autoplay", flag(config.autoplay))
        .append_pair("loop", flag(config.looping))
        .append_pair("muted", flag(config.muted))
        .append_pair("title", flag(config.show_title))
        .append_pair("byline", flag(config.show_byline))
        .append_pair("portrait", flag(config.show_portrait))
        .append_pair("badge", flag(config.show_badge))
        .append_pair("controls", flag(config.show_controls))
        .append_pair("dnt", flag(config.do_not_track));
    url
}

/// Synthesize the complete inline player document.
///
/// The document sets the configured background, embeds exactly one
/// edge-to-edge player frame, and attaches listeners for the remote
/// player's play/pause/loaded/seeked/ended events; each listener reports
/// back through `window.onVimeoEvent` with the bridge's wire name.
pub fn synthesize(config: &PlayerConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>
html, body {{ margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; background-color: {background}; }}
#player {{ position: absolute; top: 0; left: 0; width: 100%; height: 100%; border: 0; }}
</style>
</head>
<body>
<iframe id="player" src="{src}" allow="autoplay; fullscreen; picture-in-picture" allowfullscreen></iframe>
<script src="{api}"></script>
<script>
var player = new Vimeo.Player(document.getElementById('player'));
player.on('play', function () {{ window.{handler}('play'); }});
player.on('pause', function () {{ window.{handler}('pause'); }});
player.on('loaded', function () {{ window.{handler}('ready'); }});
player.on('seeked', function () {{ window.{handler}('seek'); }});
player.on('ended', function () {{ window.{handler}('finish'); }});
</script>
</body>
</html>
"#,
        background = config.background_color.to_css_hex(),
        src = embed_url(config),
        api = VIMEO_PLAYER_API,
        handler = VIMEO_EVENT_HANDLER,
    )
}
