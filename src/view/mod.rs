//! View-models: the presentation-ready shape of catalog data.
//!
//! Widgets (egui) and markup (`markup`) both render from these structs, so
//! neither depends on the catalog's own layout.

pub mod gallery;
pub mod markup;
pub mod modal;
pub mod spotlight;

use crate::catalog::{Kpi, Project};
use crate::link::LinkTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiChip {
    pub value: String,
    pub label: String,
}

impl From<&Kpi> for KpiChip {
    fn from(k: &Kpi) -> Self {
        Self {
            value: k.value.clone(),
            label: k.label.clone(),
        }
    }
}

/// One gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Carried by the "view details" trigger
    pub project_id: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub image: String,
    pub kpis: Vec<KpiChip>,
    pub tags: Vec<String>,
}

impl CardView {
    /// Reveal-tracker key for this card.
    pub fn reveal_key(&self) -> String {
        card_reveal_key(&self.project_id)
    }
}

pub const CARD_REVEAL_PREFIX: &str = "card:";

pub fn card_reveal_key(project_id: &str) -> String {
    format!("{}{}", CARD_REVEAL_PREFIX, project_id)
}

impl From<&Project> for CardView {
    fn from(p: &Project) -> Self {
        Self {
            project_id: p.id.clone(),
            title: p.title.clone(),
            date: p.date.clone(),
            description: p.description.clone(),
            image: p.image.clone(),
            kpis: p.kpis.iter().map(KpiChip::from).collect(),
            tags: p.tags.clone(),
        }
    }
}

/// Full detail view of one project, shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub project_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
    pub image: String,
    pub image_alt: String,
    /// Raw link as declared in the record
    pub link: String,
    /// `None` when the link could not be classified
    pub link_target: Option<LinkTarget>,
    pub kpis: Vec<KpiChip>,
}

impl From<&Project> for ModalView {
    fn from(p: &Project) -> Self {
        let link_target = match LinkTarget::parse(&p.link) {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        };
        Self {
            project_id: p.id.clone(),
            title: p.title.clone(),
            subtitle: p.subtitle.clone(),
            description: p.description.clone(),
            highlights: p.highlights.clone(),
            tags: p.tags.clone(),
            image: p.image.clone(),
            image_alt: p.title.clone(),
            link: p.link.clone(),
            link_target,
            kpis: p.kpis.iter().map(KpiChip::from).collect(),
        }
    }
}

/// Headline and tag currently shown by the spotlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotlightView {
    pub title: String,
    pub tag: String,
}

impl From<&Project> for SpotlightView {
    fn from(p: &Project) -> Self {
        Self {
            title: p.title.clone(),
            tag: p.lead_tag().unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_project;

    #[test]
    fn card_keeps_kpi_and_tag_order() {
        let mut p = sample_project("x", &["ml"]);
        p.kpis.push(Kpi {
            label: "Second".into(),
            value: "2".into(),
        });
        let card = CardView::from(&p);
        assert_eq!(card.project_id, "x");
        assert_eq!(card.kpis[0].label, "Score");
        assert_eq!(card.kpis[1].label, "Second");
        assert_eq!(card.tags, p.tags);
        assert_eq!(card.reveal_key(), "card:x");
    }

    #[test]
    fn modal_view_classifies_link() {
        let mut p = sample_project("doc", &["analytics"]);
        p.link = "Reports/final.pdf".into();
        let view = ModalView::from(&p);
        assert_eq!(
            view.link_target,
            Some(LinkTarget::Document("Reports/final.pdf".into()))
        );
        assert_eq!(view.image_alt, p.title);
    }

    #[test]
    fn modal_view_tolerates_bad_link() {
        let mut p = sample_project("bad", &["ml"]);
        p.link = String::new();
        let view = ModalView::from(&p);
        assert!(view.link_target.is_none());
    }

    #[test]
    fn spotlight_uses_first_tag() {
        let p = sample_project("s", &["ml"]);
        let view = SpotlightView::from(&p);
        assert_eq!(view.tag, "s-tag");

        let mut untagged = p.clone();
        untagged.tags.clear();
        assert_eq!(SpotlightView::from(&untagged).tag, "");
    }
}
