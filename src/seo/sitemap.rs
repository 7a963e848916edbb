use crate::config::SiteConfig;
use crate::models::catalog::Catalog;
use crate::render::html_escape;

use super::absolute_url;

/// Generate sitemap.xml content: the home page plus every detail page.
pub fn generate_sitemap(config: &SiteConfig, catalog: &Catalog) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
"#,
    );

    // Homepage
    xml.push_str(&format!(
        "  <url><loc>{}</loc><changefreq>monthly</changefreq><priority>1.0</priority></url>\n",
        html_escape(&absolute_url(config, "/"))
    ));

    for (kind, record) in catalog.iter() {
        xml.push_str(&format!(
            "  <url><loc>{}</loc><priority>0.8</priority></url>\n",
            html_escape(&absolute_url(config, &kind.detail_path(&record.slug)))
        ));
    }

    xml.push_str("</urlset>");
    xml
}

/// Generate robots.txt content with the sitemap URL.
pub fn generate_robots(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}",
        absolute_url(config, "/sitemap.xml")
    )
}
