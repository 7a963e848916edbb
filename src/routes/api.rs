use rocket::response::status::NotFound;
use rocket::serde::json::Json;
use rocket::State;
use serde_json::{json, Value};

use crate::models::catalog::{Catalog, CatalogKind, CatalogRecord};

// ── Catalog listing ────────────────────────────────────

#[get("/catalog/<kind>")]
pub fn catalog_list(catalog: &State<Catalog>, kind: CatalogKind) -> Json<Vec<CatalogRecord>> {
    Json(catalog.records(kind).to_vec())
}

// ── Single record ──────────────────────────────────────

#[get("/catalog/<kind>/<slug>")]
pub fn catalog_record(
    catalog: &State<Catalog>,
    kind: CatalogKind,
    slug: &str,
) -> Result<Json<CatalogRecord>, NotFound<Json<Value>>> {
    catalog
        .resolve(kind, slug)
        .map(|record| Json(record.clone()))
        .map_err(|e| NotFound(Json(json!({ "error": e.to_string() }))))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![catalog_list, catalog_record]
}
