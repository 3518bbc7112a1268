//! Project catalog: the ordered, immutable list of portfolio entries.
//!
//! The catalog is built once at startup from [`data::PROJECTS`] and passed by
//! reference to every component that reads it (gallery, modal, spotlight).
//! Construction validates the record invariants and reports the first
//! violation as a [`CatalogError`].

pub mod data;

use std::collections::HashSet;

/// A single KPI chip: a short label and its (pre-formatted) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kpi {
    pub label: String,
    pub value: String,
}

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Unique key, carried by the "view details" trigger of each card
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Free-form date range label ("Oct 2025 - Dec 2025")
    pub date: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
    pub kpis: Vec<Kpi>,
    /// Filter keywords; never empty, may hold several entries
    pub categories: Vec<String>,
    pub image: String,
    /// Absolute web URL or a path relative to the document root
    pub link: String,
}

impl Project {
    /// Whether this project belongs to the given category keyword.
    pub fn in_category(&self, keyword: &str) -> bool {
        self.categories.iter().any(|c| c == keyword)
    }

    /// First tag, shown by the spotlight.
    pub fn lead_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

/// Invariant violation found while building a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Record at `index` has an empty identifier
    EmptyId { index: usize },
    /// Two records share the same identifier
    DuplicateId(String),
    /// Record has no category and could never be filtered in
    NoCategory(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::EmptyId { index } => {
                write!(f, "project #{} has an empty identifier", index)
            }
            CatalogError::DuplicateId(id) => write!(f, "duplicate project identifier '{}'", id),
            CatalogError::NoCategory(id) => write!(f, "project '{}' has no category", id),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered, validated list of projects.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Validate `projects` and wrap them. Declaration order is kept.
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for (index, p) in projects.iter().enumerate() {
            if p.id.is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(p.id.as_str()) {
                return Err(CatalogError::DuplicateId(p.id.clone()));
            }
            if p.categories.is_empty() {
                return Err(CatalogError::NoCategory(p.id.clone()));
            }
        }
        log::debug!("Catalog built with {} projects", projects.len());
        Ok(Self { projects })
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(data::PROJECTS.iter().map(Project::from).collect())
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Distinct category keywords in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for p in &self.projects {
            for c in &p.categories {
                if !out.contains(&c.as_str()) {
                    out.push(c);
                }
            }
        }
        out
    }
}

#[cfg(test)]
pub(crate) fn sample_project(id: &str, categories: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: format!("{} title", id),
        subtitle: format!("{} subtitle", id),
        date: "2025".to_string(),
        description: format!("{} description", id),
        highlights: vec![format!("{} highlight", id)],
        tags: vec![format!("{}-tag", id), "Python".to_string()],
        kpis: vec![Kpi {
            label: "Score".to_string(),
            value: id.len().to_string(),
        }],
        categories: categories.iter().map(|c| c.to_string()).collect(),
        image: format!("https://img.example.com/{}.jpg", id),
        link: format!("https://example.com/{}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), data::PROJECTS.len());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn builtin_ids_are_unique_and_resolve() {
        let catalog = Catalog::builtin().unwrap();
        for p in catalog.iter() {
            let matches = catalog.iter().filter(|q| q.id == p.id).count();
            assert_eq!(matches, 1, "id {} not unique", p.id);
            assert_eq!(catalog.get(&p.id).map(|q| &q.title), Some(&p.title));
        }
    }

    #[test]
    fn builtin_records_have_categories_and_kpis() {
        let catalog = Catalog::builtin().unwrap();
        for p in catalog.iter() {
            assert!(!p.categories.is_empty());
            assert!(!p.tags.is_empty(), "{} has no tags", p.id);
            assert_eq!(p.kpis.len(), 3, "{} kpi count", p.id);
        }
    }

    #[test]
    fn declared_order_is_kept() {
        let catalog = Catalog::builtin().unwrap();
        let first = catalog.at(0).unwrap();
        assert_eq!(first.id, "ai-factuality");
        assert_eq!(first.kpis[0].label, "Macro AUC");
        assert_eq!(first.tags, vec!["NLP", "Ensemble", "Feature Engineering", "AUC 0.9354"]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = Catalog::new(vec![
            sample_project("a", &["ml"]),
            sample_project("a", &["nlp"]),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("a".to_string()));
        assert_eq!(err.to_string(), "duplicate project identifier 'a'");
    }

    #[test]
    fn empty_category_rejected() {
        let err = Catalog::new(vec![sample_project("lonely", &[])]).unwrap_err();
        assert_eq!(err, CatalogError::NoCategory("lonely".to_string()));
    }

    #[test]
    fn empty_id_rejected() {
        let err = Catalog::new(vec![sample_project("ok", &["ml"]), sample_project("", &["ml"])])
            .unwrap_err();
        assert_eq!(err, CatalogError::EmptyId { index: 1 });
    }

    #[test]
    fn unknown_id_is_none() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn categories_first_seen_order() {
        let catalog = Catalog::new(vec![
            sample_project("a", &["ml", "nlp"]),
            sample_project("b", &["analytics", "ml"]),
        ])
        .unwrap();
        assert_eq!(catalog.categories(), vec!["ml", "nlp", "analytics"]);
    }

    #[test]
    fn domain_stat_counts_builtin_categories() {
        let catalog = Catalog::builtin().unwrap();
        let stat = data::HERO_STATS
            .iter()
            .find(|s| s.label == "Analysis Domains")
            .unwrap();
        assert_eq!(stat.target as usize, catalog.categories().len());
    }

    #[test]
    fn lead_tag_and_membership() {
        let p = sample_project("x", &["automation", "analytics"]);
        assert_eq!(p.lead_tag(), Some("x-tag"));
        assert!(p.in_category("analytics"));
        assert!(!p.in_category("ml"));
    }
}
