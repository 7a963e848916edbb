#[macro_use]
extern crate rocket;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::fs::{FileServer, Options};
use rocket::http::Header;
use rocket::response::content::RawHtml;
use rocket::{Build, Request, Rocket};

pub mod boot;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod routes;
pub mod seo;
pub mod ui;
pub mod views;


use config::SiteConfig;
use models::catalog::Catalog;

/// Long-lived caching for media files; pages always revalidate.
pub struct CacheControl;

const MEDIA_EXTENSIONS: &[&str] = &[".pdf", ".png", ".jpg", ".jpeg", ".webp", ".svg", ".mp4"];

#[rocket::async_trait]
impl Fairing for CacheControl {
    fn info(&self) -> Info {
        Info { name: "Cache-Control Headers", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut rocket::Response<'r>) {
        let path = req.uri().path().as_str().to_ascii_lowercase();
        let is_media = path.starts_with("/images/")
            || path.starts_with("/videos/")
            || MEDIA_EXTENSIONS.iter().any(|ext| path.ends_with(ext));
        if is_media {
            res.set_header(Header::new("Cache-Control", "public, max-age=604800"));
        } else {
            res.set_header(Header::new("Cache-Control", "no-cache"));
        }
    }
}

#[catch(404)]
fn not_found(req: &Request<'_>) -> RawHtml<String> {
    let config = req.rocket().state::<SiteConfig>().cloned().unwrap_or_default();
    RawHtml(render::render_not_found(&config, "Page not found"))
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

/// Assemble the server from its parts. The binary calls this after the boot
/// check; tests call it with their own configuration.
pub fn build(figment: Figment, config: SiteConfig, catalog: Catalog) -> Rocket<Build> {
    let assets = FileServer::new(&config.assets_dir, Options::Index | Options::Missing);

    rocket::custom(figment)
        .manage(config)
        .manage(catalog)
        .attach(CacheControl)
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .mount("/", assets)
        .register("/", catchers![not_found, server_error])
}
