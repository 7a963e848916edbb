use crate::config::SiteConfig;
use crate::models::catalog::{Catalog, CatalogKind, CatalogRecord};
use crate::render::html_escape;
use crate::ui::ActiveSection;

use super::{media, render_badges};

/// Home page body: hero, gallery toggle and the active gallery only.
pub fn render_home(config: &SiteConfig, catalog: &Catalog, section: ActiveSection) -> String {
    let kind = section.kind();
    format!(
        r#"<section class="hero">
    <h1>{owner}</h1>
    <p class="hero-tagline">{tagline}</p>
    <p class="hero-bio">{bio}</p>
</section>
<section class="gallery" id="{anchor}">
    {toggle}
    <h2>{heading}</h2>
    {grid}
</section>"#,
        owner = html_escape(&config.owner_name),
        tagline = html_escape(&config.tagline),
        bio = html_escape(&config.bio),
        anchor = section.anchor(),
        toggle = render_toggle(section),
        heading = kind.heading(),
        grid = render_grid(kind, catalog.records(kind)),
    )
}

fn render_toggle(active: ActiveSection) -> String {
    let mut html = String::from(r#"<nav class="section-toggle" aria-label="Gallery">"#);
    for section in ActiveSection::all() {
        let is_active = section == active;
        html.push_str(&format!(
            r#"<a href="{}" class="toggle-btn{}" aria-pressed="{}">{}</a>"#,
            section.href(),
            if is_active { " active" } else { "" },
            is_active,
            section.kind().label(),
        ));
    }
    html.push_str("</nav>");
    html
}

/// One card per record, in catalog order.
pub fn render_grid(kind: CatalogKind, records: &[CatalogRecord]) -> String {
    if records.is_empty() {
        return format!("<p>No {} yet.</p>", kind.route());
    }

    let mut html = format!(r#"<div class="card-grid" data-section="{}">"#, kind.route());
    for record in records {
        html.push_str(&render_card(kind, record));
    }
    html.push_str("</div>");
    html
}

fn render_card(kind: CatalogKind, record: &CatalogRecord) -> String {
    format!(
        r#"<article class="card" data-slug="{slug}">
    <h3 class="card-title">{title}</h3>
    {badges}
    <div class="media-frame">{preview}</div>
    <p class="card-summary">{summary}</p>
    <div class="card-action"><a class="btn btn-primary btn-block" href="{href}">View Details</a></div>
</article>"#,
        slug = html_escape(&record.slug),
        title = html_escape(&record.title),
        badges = render_badges(&record.tags),
        preview = media::card_preview(record.preview(), &record.title),
        summary = html_escape(&record.summary),
        href = kind.detail_path(&record.slug),
    )
}
