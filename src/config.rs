use rocket::figment::Figment;
use serde::{Deserialize, Serialize};

use crate::ui::lazy_video::DEFAULT_THRESHOLD;

/// Site settings, read from the `site` table of Rocket's configuration
/// (`Rocket.toml`, or `ROCKET_SITE={...}` in the environment).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner_name: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub site_url: String,
    pub assets_dir: String,
    /// Fraction of a video container that must be on screen before it loads.
    pub video_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            owner_name: "Prasad Khambadkar".to_string(),
            tagline: "Design & Analysis".to_string(),
            bio: "Specialized in computational mechanics, advanced CAD modeling, and structural optimization. \
                  Leveraging FEA and parametric design to deliver robust engineering solutions across automotive, \
                  consumer products, and industrial applications."
                .to_string(),
            email: "your.email@example.com".to_string(),
            linkedin_url: "https://linkedin.com".to_string(),
            github_url: "https://github.com".to_string(),
            site_url: "http://localhost:8000".to_string(),
            assets_dir: "website/static".to_string(),
            video_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SiteConfig {
    /// Extract from a figment, falling back to defaults when the table is
    /// absent or malformed.
    pub fn from_figment(figment: &Figment) -> Self {
        let mut config = match figment.extract_inner::<SiteConfig>("site") {
            Ok(c) => c,
            Err(e) => {
                if !e.missing() {
                    log::warn!("Invalid [site] configuration, using defaults: {}", e);
                }
                SiteConfig::default()
            }
        };
        config.video_threshold = clamp_threshold(config.video_threshold);
        config.site_url = config.site_url.trim_end_matches('/').to_string();
        config
    }
}

fn clamp_threshold(t: f64) -> f64 {
    if t.is_finite() && t > 0.0 {
        t.min(1.0)
    } else {
        DEFAULT_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(clamp_threshold(0.25), 0.25);
        assert_eq!(clamp_threshold(3.0), 1.0);
        assert_eq!(clamp_threshold(0.0), 0.1);
        assert_eq!(clamp_threshold(-1.0), 0.1);
        assert_eq!(clamp_threshold(f64::NAN), 0.1);
    }

    #[test]
    fn missing_table_uses_defaults() {
        let config = SiteConfig::from_figment(&Figment::new());
        assert_eq!(config.assets_dir, "website/static");
        assert_eq!(config.video_threshold, 0.1);
    }

    #[test]
    fn site_table_overrides_fields() {
        use rocket::figment::providers::Serialized;
        let figment = Figment::new().merge(Serialized::default(
            "site",
            serde_json::json!({ "email": "me@example.org", "site_url": "https://example.org/" }),
        ));
        let config = SiteConfig::from_figment(&figment);
        assert_eq!(config.email, "me@example.org");
        assert_eq!(config.site_url, "https://example.org");
        assert_eq!(config.owner_name, SiteConfig::default().owner_name);
    }
}
