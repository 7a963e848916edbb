//! Page-level interactive state: gallery toggle, lightbox, lazy video and
//! the copy-email confirmation. The server uses these to render initial
//! markup; the page script mirrors their transitions in the browser.

pub mod copy_email;
pub mod lazy_video;
pub mod lightbox;
pub mod section;

pub use copy_email::{CopyEmail, COPIED_FOR, COPIED_LABEL, COPY_LABEL};
pub use lazy_video::{LazyVideo, VideoCommand, VideoEvent, VideoPhase};
pub use lightbox::{Lightbox, LightboxEvent};
pub use section::ActiveSection;
