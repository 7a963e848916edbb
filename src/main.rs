use std::process;

use log::error;

use portfolio_site::boot;
use portfolio_site::config::SiteConfig;
use portfolio_site::models::catalog::Catalog;

#[rocket::launch]
fn rocket() -> _ {
    env_logger::init();

    let figment = rocket::Config::figment();
    let config = SiteConfig::from_figment(&figment);

    let catalog = match Catalog::builtin() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            process::exit(1);
        }
    };

    // Boot check: create asset directories, report missing media
    let report = boot::run(&config, &catalog);
    if report.errors > 0 {
        process::exit(1);
    }

    portfolio_site::build(figment, config, catalog)
}
