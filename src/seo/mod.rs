pub mod meta;
pub mod sitemap;

// Re-export commonly used functions
pub use meta::build_meta;
pub use sitemap::{generate_robots, generate_sitemap};

use url::Url;

use crate::config::SiteConfig;

/// Absolute URL for a site path, based on `site_url`.
pub fn absolute_url(config: &SiteConfig, path: &str) -> String {
    match Url::parse(&config.site_url).and_then(|base| base.join(path)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", config.site_url, path),
    }
}
