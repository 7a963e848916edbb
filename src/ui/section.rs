use crate::models::catalog::CatalogKind;

/// Which gallery the home page shows. Lives for one request; a fresh
/// navigation without `?section=` starts from the default again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Projects,
    Certificates,
}

impl ActiveSection {
    /// Parse the `section` query value. Unknown values fall back to the default.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("certificates") | Some("certifications") => ActiveSection::Certificates,
            _ => ActiveSection::Projects,
        }
    }

    /// Switch to `next`. Selecting the current section changes nothing.
    pub fn select(self, next: ActiveSection) -> Self {
        next
    }

    pub fn kind(self) -> CatalogKind {
        match self {
            ActiveSection::Projects => CatalogKind::Projects,
            ActiveSection::Certificates => CatalogKind::Certificates,
        }
    }

    pub fn all() -> [ActiveSection; 2] {
        [ActiveSection::Projects, ActiveSection::Certificates]
    }

    /// Fragment id of the gallery section.
    pub fn anchor(self) -> &'static str {
        match self {
            ActiveSection::Projects => "projects",
            ActiveSection::Certificates => "certifications",
        }
    }

    /// Link that selects this section.
    pub fn href(self) -> String {
        format!("/?section={}#{}", self.kind().route(), self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parsing() {
        assert_eq!(ActiveSection::from_query(None), ActiveSection::Projects);
        assert_eq!(ActiveSection::from_query(Some("projects")), ActiveSection::Projects);
        assert_eq!(ActiveSection::from_query(Some("certificates")), ActiveSection::Certificates);
        assert_eq!(ActiveSection::from_query(Some("Certificates")), ActiveSection::Projects);
        assert_eq!(ActiveSection::from_query(Some("")), ActiveSection::Projects);
    }

    #[test]
    fn select_is_idempotent() {
        let s = ActiveSection::Certificates;
        assert_eq!(s.select(ActiveSection::Certificates), s);
        assert_eq!(
            s.select(ActiveSection::Projects).select(ActiveSection::Projects),
            ActiveSection::Projects
        );
    }
}
