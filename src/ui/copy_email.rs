use std::time::{Duration, Instant};

use log::warn;

use crate::error::ClipboardError;

/// How long the "Copied!" confirmation stays up.
pub const COPIED_FOR: Duration = Duration::from_millis(2000);

pub const COPY_LABEL: &str = "Copy Email";
pub const COPIED_LABEL: &str = "Copied!";

/// Confirmation state for the copy-email button.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyEmail {
    copied_at: Option<Instant>,
}

impl CopyEmail {
    pub fn new() -> Self {
        CopyEmail::default()
    }

    /// Feed the outcome of a clipboard write. Failures are logged and leave
    /// the state as it was.
    pub fn record(&mut self, result: Result<(), ClipboardError>, now: Instant) {
        match result {
            Ok(()) => self.copied_at = Some(now),
            Err(e) => warn!("Failed to copy email: {}", e),
        }
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .map(|at| now.saturating_duration_since(at) < COPIED_FOR)
            .unwrap_or(false)
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_copied(now) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}
