use log::warn;
use rocket::response::content::{RawHtml, RawText, RawXml};
use rocket::response::status::NotFound;
use rocket::State;

use crate::config::SiteConfig;
use crate::models::catalog::{Catalog, CatalogKind};
use crate::render;
use crate::seo;
use crate::ui::{ActiveSection, Lightbox};
use crate::views;

// ── Homepage ───────────────────────────────────────────

#[get("/?<section>")]
pub fn homepage(
    config: &State<SiteConfig>,
    catalog: &State<Catalog>,
    section: Option<&str>,
) -> RawHtml<String> {
    let section = ActiveSection::from_query(section);
    let meta = seo::build_meta(config, None, None, "/");
    let body = views::render_home(config, catalog, section);
    RawHtml(render::render_page(config, &meta, &body))
}

// ── Detail pages ───────────────────────────────────────

#[get("/projects/<slug>?<view>")]
pub fn project(
    config: &State<SiteConfig>,
    catalog: &State<Catalog>,
    slug: &str,
    view: Option<usize>,
) -> Result<RawHtml<String>, NotFound<RawHtml<String>>> {
    detail_page(config, catalog, CatalogKind::Projects, slug, view)
}

#[get("/certificates/<slug>?<view>")]
pub fn certificate(
    config: &State<SiteConfig>,
    catalog: &State<Catalog>,
    slug: &str,
    view: Option<usize>,
) -> Result<RawHtml<String>, NotFound<RawHtml<String>>> {
    detail_page(config, catalog, CatalogKind::Certificates, slug, view)
}

fn detail_page(
    config: &SiteConfig,
    catalog: &Catalog,
    kind: CatalogKind,
    slug: &str,
    view: Option<usize>,
) -> Result<RawHtml<String>, NotFound<RawHtml<String>>> {
    let record = catalog.resolve(kind, slug).map_err(|e| {
        warn!("{}", e);
        NotFound(RawHtml(render::render_not_found(config, kind.not_found_message())))
    })?;

    let lightbox = Lightbox::for_view(record, view);
    let description = Some(record.summary.as_str()).filter(|s| !s.is_empty());
    let meta = seo::build_meta(
        config,
        Some(record.title.as_str()),
        description,
        &kind.detail_path(&record.slug),
    );
    let body = views::render_detail(config, kind, record, &lightbox);
    Ok(RawHtml(render::render_page(config, &meta, &body)))
}

// ── SEO ────────────────────────────────────────────────

#[get("/sitemap.xml")]
pub fn sitemap(config: &State<SiteConfig>, catalog: &State<Catalog>) -> RawXml<String> {
    RawXml(seo::generate_sitemap(config, catalog))
}

#[get("/robots.txt")]
pub fn robots(config: &State<SiteConfig>) -> RawText<String> {
    RawText(seo::generate_robots(config))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![homepage, project, certificate, sitemap, robots]
}
