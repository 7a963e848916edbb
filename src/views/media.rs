use crate::models::media::{Media, MediaKind};
use crate::render::{encode_path, html_escape};

const PLACEHOLDER: &str = "/placeholder.svg";

/// Thumbnail rendering. Documents get a chromeless, scrollbar-free viewer
/// that ignores pointer and keyboard focus; everything else is an `<img>`.
pub fn preview(media: &Media, alt: &str) -> String {
    let src = html_escape(&encode_path(&media.uri));
    let alt = html_escape(alt);
    match media.kind {
        MediaKind::Document => format!(
            r#"<iframe class="doc-preview" src="{src}#toolbar=0&amp;navpanes=0&amp;scrollbar=0&amp;view=Fit" title="{alt}" tabindex="-1" scrolling="no"></iframe>"#
        ),
        MediaKind::Image => format!(r#"<img src="{src}" alt="{alt}" loading="lazy">"#),
    }
}

/// Enlarged rendering inside the lightbox. Documents are interactive here.
pub fn enlarged(media: &Media, alt: &str) -> String {
    let src = html_escape(&encode_path(&media.uri));
    match media.kind {
        MediaKind::Document => format!(
            r#"<iframe class="lb-document" src="{src}" title="{}"></iframe>"#,
            html_escape(alt)
        ),
        MediaKind::Image => format!(r#"<img class="lb-image" src="{src}" alt="Fullscreen Document">"#),
    }
}

/// Card preview, or the placeholder image when a record has no media.
pub fn card_preview(media: Option<&Media>, alt: &str) -> String {
    match media {
        Some(m) => preview(m, alt),
        None => format!(
            r#"<img src="{}" alt="{}">"#,
            PLACEHOLDER,
            html_escape(alt)
        ),
    }
}

/// `data-kind` value the page script reads.
pub fn kind_attr(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Document => "document",
        MediaKind::Image => "image",
    }
}
