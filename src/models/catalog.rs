use std::collections::HashMap;

use rocket::request::FromParam;
use serde::{Deserialize, Serialize};

use super::media::Media;
use crate::error::{CatalogError, LookupError};

const CATALOG_TOML: &str = include_str!("../../content/catalog.toml");

/// Which of the two galleries a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Projects,
    Certificates,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 2] = [CatalogKind::Projects, CatalogKind::Certificates];

    /// Path segment for detail pages: `/{route}/{slug}`.
    pub fn route(self) -> &'static str {
        match self {
            CatalogKind::Projects => "projects",
            CatalogKind::Certificates => "certificates",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            CatalogKind::Projects => "project",
            CatalogKind::Certificates => "certificate",
        }
    }

    /// Gallery heading on the home page.
    pub fn heading(self) -> &'static str {
        match self {
            CatalogKind::Projects => "Featured Projects",
            CatalogKind::Certificates => "Certifications",
        }
    }

    /// Toggle button label.
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Projects => "Projects",
            CatalogKind::Certificates => "Certifications",
        }
    }

    pub fn not_found_message(self) -> &'static str {
        match self {
            CatalogKind::Projects => "Project not found",
            CatalogKind::Certificates => "Certificate not found",
        }
    }

    pub fn back_href(self) -> &'static str {
        match self {
            CatalogKind::Projects => "/",
            CatalogKind::Certificates => "/?section=certificates#certifications",
        }
    }

    pub fn back_label(self) -> &'static str {
        match self {
            CatalogKind::Projects => "Back to Projects",
            CatalogKind::Certificates => "Back to Certifications",
        }
    }

    pub fn detail_path(self, slug: &str) -> String {
        format!("/{}/{}", self.route(), slug)
    }
}

impl<'a> FromParam<'a> for CatalogKind {
    type Error = &'a str;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        match param {
            "projects" => Ok(CatalogKind::Projects),
            "certificates" => Ok(CatalogKind::Certificates),
            other => Err(other),
        }
    }
}

/// One project or certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub images: Vec<Media>,
    #[serde(default)]
    pub videos: Vec<String>,
}

impl CatalogRecord {
    /// Card preview: the first image, if any.
    pub fn preview(&self) -> Option<&Media> {
        self.images.first()
    }

    pub fn media(&self, index: usize) -> Option<&Media> {
        self.images.get(index)
    }
}

#[derive(Debug, Default)]
struct Collection {
    records: Vec<CatalogRecord>,
    by_slug: HashMap<String, usize>,
}

impl Collection {
    fn build(kind: CatalogKind, records: Vec<CatalogRecord>) -> Result<Self, CatalogError> {
        let mut by_slug = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let expected = slug::slugify(&record.slug);
            if record.slug.is_empty() || expected != record.slug {
                return Err(CatalogError::InvalidSlug {
                    kind,
                    slug: record.slug.clone(),
                    expected,
                });
            }
            if record.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle {
                    kind,
                    slug: record.slug.clone(),
                });
            }
            if by_slug.insert(record.slug.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSlug {
                    kind,
                    slug: record.slug.clone(),
                });
            }
        }
        Ok(Collection { records, by_slug })
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<CatalogRecord>,
    #[serde(default)]
    certificates: Vec<CatalogRecord>,
}

/// The two static catalogs, indexed by slug. Immutable once built.
#[derive(Debug)]
pub struct Catalog {
    projects: Collection,
    certificates: Collection,
}

impl Catalog {
    /// The content compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(CATALOG_TOML)
    }

    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::from_records(file.projects, file.certificates)
    }

    pub fn from_records(
        projects: Vec<CatalogRecord>,
        certificates: Vec<CatalogRecord>,
    ) -> Result<Self, CatalogError> {
        Ok(Catalog {
            projects: Collection::build(CatalogKind::Projects, projects)?,
            certificates: Collection::build(CatalogKind::Certificates, certificates)?,
        })
    }

    fn collection(&self, kind: CatalogKind) -> &Collection {
        match kind {
            CatalogKind::Projects => &self.projects,
            CatalogKind::Certificates => &self.certificates,
        }
    }

    /// Records of one catalog in display order.
    pub fn records(&self, kind: CatalogKind) -> &[CatalogRecord] {
        &self.collection(kind).records
    }

    /// Exact, case-sensitive slug lookup.
    pub fn resolve(&self, kind: CatalogKind, slug: &str) -> Result<&CatalogRecord, LookupError> {
        let collection = self.collection(kind);
        collection
            .by_slug
            .get(slug)
            .map(|&i| &collection.records[i])
            .ok_or_else(|| LookupError::NotFound {
                kind,
                slug: slug.to_string(),
            })
    }

    /// Every record with the catalog it belongs to.
    pub fn iter(&self) -> impl Iterator<Item = (CatalogKind, &CatalogRecord)> {
        CatalogKind::ALL
            .into_iter()
            .flat_map(move |kind| self.records(kind).iter().map(move |r| (kind, r)))
    }
}
