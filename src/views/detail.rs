use crate::config::SiteConfig;
use crate::models::catalog::{CatalogKind, CatalogRecord};
use crate::models::media::Media;
use crate::render::{encode_path, html_escape};
use crate::ui::{LazyVideo, Lightbox};

use super::{media, render_badges};

/// Detail page body for a project or certificate.
pub fn render_detail(
    config: &SiteConfig,
    kind: CatalogKind,
    record: &CatalogRecord,
    lightbox: &Lightbox,
) -> String {
    let sections = match kind {
        CatalogKind::Projects => {
            let mut s = render_images(record);
            s.push_str(&render_videos(record, config.video_threshold));
            s.push_str(&render_bullets("Technical Details", &record.details));
            s
        }
        CatalogKind::Certificates => {
            let mut s = render_bullets("Course Contents & Topics Covered", &record.details);
            s.push_str(&render_documents(record));
            s
        }
    };

    format!(
        r#"<div class="back-bar">
    <a class="btn btn-ghost" href="{back_href}">&larr; {back_label}</a>
</div>
<article class="detail">
    <h1>{title}</h1>
    {badges}
    <div class="prose"><p>{description}</p></div>
    {sections}
</article>
{lightbox}"#,
        back_href = kind.back_href(),
        back_label = kind.back_label(),
        title = html_escape(&record.title),
        badges = render_badges(&record.tags),
        description = html_escape(&record.description),
        sections = sections,
        lightbox = render_lightbox(kind, record, lightbox),
    )
}

fn render_images(record: &CatalogRecord) -> String {
    if record.images.is_empty() {
        return String::new();
    }
    let mut html = String::from(
        r#"<section class="detail-section"><h2>Images</h2><div class="media-grid">"#,
    );
    for (i, image) in record.images.iter().enumerate() {
        html.push_str(&lightbox_trigger(i, image, &record.title, "media-frame"));
    }
    html.push_str("</div></section>");
    html
}

fn render_videos(record: &CatalogRecord, threshold: f64) -> String {
    if record.videos.is_empty() {
        return String::new();
    }
    let mut html = String::from(
        r#"<section class="detail-section"><h2>Videos</h2><div class="media-grid">"#,
    );
    for src in &record.videos {
        html.push_str(&LazyVideo::new(src.as_str(), threshold).render());
    }
    html.push_str("</div></section>");
    html
}

fn render_bullets(heading: &str, items: &[String]) -> String {
    let mut html = format!(
        r#"<section class="bullet-card"><h2>{}</h2><ul class="bullets">"#,
        html_escape(heading)
    );
    for item in items {
        html.push_str(&format!("<li>{}</li>", html_escape(item)));
    }
    html.push_str("</ul></section>");
    html
}

/// Certificate documents: the first file is the certificate itself, the
/// second the marksheet.
fn render_documents(record: &CatalogRecord) -> String {
    if record.images.is_empty() {
        return String::new();
    }
    let mut html = String::from(
        r#"<section class="detail-section"><h2>Documents</h2><div class="media-grid">"#,
    );
    for (i, doc) in record.images.iter().enumerate() {
        let (label, icon) = document_label(i);
        html.push_str(&format!(
            r#"<div class="document"><div class="doc-label">{icon}<span>{label}</span></div>{trigger}</div>"#,
            icon = icon,
            label = label,
            trigger = lightbox_trigger(i, doc, &document_alt(record, i), "media-frame document-frame"),
        ));
    }
    html.push_str("</div></section>");
    html
}

fn document_label(index: usize) -> (String, &'static str) {
    const CHECK: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><polyline points="14 2 14 8 20 8"/><path d="m9 15 2 2 4-4"/></svg>"#;
    const SHEET: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><polyline points="14 2 14 8 20 8"/><path d="M8 13h8M8 17h8M10 9H8"/></svg>"#;
    match index {
        0 => ("Certificate of Completion".to_string(), CHECK),
        1 => ("Course Marksheet / Assessment".to_string(), SHEET),
        n => (format!("Document {}", n + 1), SHEET),
    }
}

fn document_alt(record: &CatalogRecord, index: usize) -> String {
    match index {
        0 => format!("{} Certificate", record.title),
        1 => format!("{} Marksheet", record.title),
        n => format!("{} Document {}", record.title, n + 1),
    }
}

/// A preview that opens the lightbox. Without script it is a plain link to
/// `?view={index}`, which renders the page with the lightbox open.
fn lightbox_trigger(index: usize, item: &Media, alt: &str, class: &str) -> String {
    format!(
        r#"<a class="{class} lightbox-trigger" href="?view={index}" data-src="{src}" data-kind="{kind}" data-alt="{alt}">{preview}</a>"#,
        class = class,
        index = index,
        src = html_escape(&encode_path(&item.uri)),
        kind = media::kind_attr(item.kind),
        alt = html_escape(alt),
        preview = media::preview(item, alt),
    )
}

/// Server-rendered overlay. Backdrop and close control link back to the page;
/// the content sits beside the backdrop, not inside it, so clicking the media
/// never lands on the backdrop.
fn render_lightbox(kind: CatalogKind, record: &CatalogRecord, lightbox: &Lightbox) -> String {
    let Some(selected) = lightbox.selected() else {
        return String::new();
    };
    let close_href = kind.detail_path(&record.slug);
    format!(
        r#"<div class="lightbox-overlay active" role="dialog" aria-modal="true">
    <a class="lb-backdrop" href="{close}" aria-label="Close"></a>
    <a class="lb-close" href="{close}" aria-label="Close fullscreen view">&times;</a>
    <div class="lb-content">{content}</div>
</div>"#,
        close = close_href,
        content = media::enlarged(selected, &record.title),
    )
}
