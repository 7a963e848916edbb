use serde::{Deserialize, Serialize};

/// How a media file is shown: embedded document viewer or plain image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Document,
    Image,
}

impl MediaKind {
    /// `.pdf` (any case) is a document; anything else renders as an image.
    /// Query strings and fragments are ignored.
    pub fn from_uri(uri: &str) -> Self {
        let path = uri.split(['?', '#']).next().unwrap_or(uri);
        if path.to_ascii_lowercase().ends_with(".pdf") {
            MediaKind::Document
        } else {
            MediaKind::Image
        }
    }
}

/// A media reference whose kind is decided once, when the catalog loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Media {
    pub uri: String,
    pub kind: MediaKind,
}

impl Media {
    pub fn new(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let kind = MediaKind::from_uri(&uri);
        Media { uri, kind }
    }
}

impl From<String> for Media {
    fn from(uri: String) -> Self {
        Media::new(uri)
    }
}
