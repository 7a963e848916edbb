use thiserror::Error;

use crate::models::catalog::CatalogKind;

/// A slug that does not resolve to a record. The only error a visitor sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no {} record with slug '{slug}'", kind.singular())]
    NotFound { kind: CatalogKind, slug: String },
}

/// Problems with the embedded content file. Fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog content is malformed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{kind:?} slug '{slug}' is not URL-safe (expected '{expected}')")]
    InvalidSlug {
        kind: CatalogKind,
        slug: String,
        expected: String,
    },

    #[error("{kind:?} slug '{slug}' appears more than once")]
    DuplicateSlug { kind: CatalogKind, slug: String },

    #[error("{kind:?} record '{slug}' has an empty title")]
    EmptyTitle { kind: CatalogKind, slug: String },
}

/// Clipboard write failures. Logged, never shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard permission denied")]
    PermissionDenied,

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}
