use crate::config::SiteConfig;
use crate::render::html_escape;

/// Build meta tags HTML string for a page
pub fn build_meta(
    config: &SiteConfig,
    title: Option<&str>,
    description: Option<&str>,
    path: &str,
) -> String {
    let site_name = &config.owner_name;
    let page_title = match title {
        Some(t) => format!("{} | {}", t, site_name),
        None => format!("{} | {}", site_name, config.tagline),
    };
    let page_desc = description.unwrap_or(&config.bio);
    let canonical = super::absolute_url(config, path);

    format!(
        r#"<title>{title}</title>
<meta name="description" content="{desc}">
<link rel="canonical" href="{canonical}">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{desc}">
<meta property="og:url" content="{canonical}">
<meta property="og:site_name" content="{site_name}">
<meta property="og:type" content="website">"#,
        title = html_escape(&page_title),
        desc = html_escape(page_desc),
        canonical = html_escape(&canonical),
        site_name = html_escape(site_name),
    )
}
