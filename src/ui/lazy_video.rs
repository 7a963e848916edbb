//! Viewport-gated video player.
//!
//! The server renders a player in its initial phase; the page script drives
//! the same transitions in the browser. Nothing is fetched until the
//! container first becomes visible, and once mounted the `<video>` element
//! stays for the life of the page.

use crate::render::{encode_path, html_escape};

pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoPhase {
    /// Not mounted, no request issued.
    Unseen,
    /// Mounted and buffering; loading indicator shown.
    Loading,
    /// Playable; indicator hidden.
    Ready,
    /// Scrolled away after mounting. Element kept, playback paused.
    PausedOutOfView,
}

/// Signals from the visibility observer and the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VideoEvent {
    /// Fraction of the container currently on screen.
    Visibility(f64),
    LoadStart,
    Waiting,
    CanPlay,
    Playing,
    /// The platform refused unsolicited playback.
    AutoplayRejected,
}

/// What the page has to do to the media element after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCommand {
    /// Create the element (starts the metadata fetch) and try muted autoplay.
    MountAndPlay,
    Play,
    Pause,
    ShowControls,
}

#[derive(Debug, Clone)]
pub struct LazyVideo {
    src: String,
    threshold: f64,
    mounted: bool,
    mount_count: u32,
    in_view: bool,
    loading: bool,
    playing: bool,
    controls_visible: bool,
}

impl LazyVideo {
    pub fn new(src: impl Into<String>, threshold: f64) -> Self {
        LazyVideo {
            src: src.into(),
            threshold,
            mounted: false,
            mount_count: 0,
            in_view: false,
            loading: true,
            playing: false,
            controls_visible: false,
        }
    }

    pub fn phase(&self) -> VideoPhase {
        if !self.mounted {
            VideoPhase::Unseen
        } else if !self.in_view {
            VideoPhase::PausedOutOfView
        } else if self.loading {
            VideoPhase::Loading
        } else {
            VideoPhase::Ready
        }
    }

    /// True once the element exists, i.e. once media has been requested.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount_count(&self) -> u32 {
        self.mount_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    pub fn handle(&mut self, event: VideoEvent) -> Option<VideoCommand> {
        match event {
            VideoEvent::Visibility(ratio) => self.on_visibility(ratio),
            // Media events can only come from a mounted element.
            _ if !self.mounted => None,
            VideoEvent::LoadStart | VideoEvent::Waiting => {
                self.loading = true;
                None
            }
            VideoEvent::CanPlay => {
                self.loading = false;
                None
            }
            VideoEvent::Playing => {
                self.loading = false;
                self.playing = true;
                None
            }
            VideoEvent::AutoplayRejected => {
                self.playing = false;
                if self.controls_visible {
                    None
                } else {
                    self.controls_visible = true;
                    Some(VideoCommand::ShowControls)
                }
            }
        }
    }

    /// The threshold only gates the first mount. Once mounted, any on-screen
    /// fraction counts as in view; playback pauses only after the container
    /// has left the viewport entirely.
    fn on_visibility(&mut self, ratio: f64) -> Option<VideoCommand> {
        if !self.mounted {
            if ratio > 0.0 && ratio >= self.threshold {
                self.mounted = true;
                self.mount_count += 1;
                self.in_view = true;
                self.loading = true;
                return Some(VideoCommand::MountAndPlay);
            }
            return None;
        }

        let was_in_view = self.in_view;
        self.in_view = ratio > 0.0;
        match (was_in_view, self.in_view) {
            (true, false) => {
                self.playing = false;
                Some(VideoCommand::Pause)
            }
            (false, true) if !self.controls_visible => Some(VideoCommand::Play),
            _ => None,
        }
    }

    /// Markup for the current phase. Unmounted players carry the source in
    /// `data-src` only, so the browser does not fetch anything.
    pub fn render(&self) -> String {
        let src = encode_path(&self.src);
        let spinner_hidden = if self.loading { "" } else { " hidden" };
        let video = if self.mounted {
            format!(
                r#"<video class="lazy-video-el{loading}" loop muted playsinline preload="metadata"{controls}><source src="{src}" type="video/mp4">Your browser does not support the video tag.</video>"#,
                loading = if self.loading { " is-loading" } else { "" },
                controls = if self.controls_visible { " controls" } else { "" },
                src = html_escape(&src),
            )
        } else {
            String::new()
        };
        format!(
            r#"<div class="lazy-video media-frame" data-src="{src}" data-threshold="{threshold}" data-phase="{phase}"><div class="video-spinner"{spinner_hidden} role="status" aria-label="Loading video"><span class="spinner"></span></div>{video}</div>"#,
            src = html_escape(&src),
            threshold = self.threshold,
            phase = phase_name(self.phase()),
            spinner_hidden = spinner_hidden,
            video = video,
        )
    }
}

fn phase_name(phase: VideoPhase) -> &'static str {
    match phase {
        VideoPhase::Unseen => "unseen",
        VideoPhase::Loading => "loading",
        VideoPhase::Ready => "ready",
        VideoPhase::PausedOutOfView => "paused",
    }
}
