//! Filterable project gallery.
//!
//! Every filter change rebuilds the card list from scratch and re-registers
//! the new cards with the reveal tracker so they animate in.

use crate::catalog::{Catalog, Project};
use crate::render::reveal::RevealTracker;

use super::{CardView, CARD_REVEAL_PREFIX};

/// Keyword that selects every project.
pub const FILTER_ALL: &str = "all";

/// Filter buttons, (keyword, label), in display order.
pub const FILTERS: &[(&str, &str)] = &[
    (FILTER_ALL, "All"),
    ("ml", "Machine Learning"),
    ("nlp", "NLP"),
    ("analytics", "Analytics"),
    ("automation", "Automation"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword == FILTER_ALL {
            Filter::All
        } else {
            Filter::Category(keyword.to_string())
        }
    }

    pub fn keyword(&self) -> &str {
        match self {
            Filter::All => FILTER_ALL,
            Filter::Category(c) => c,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => project.in_category(c),
        }
    }
}

/// Catalog entries passing `filter`, in catalog order.
pub fn select<'a>(catalog: &'a Catalog, filter: &Filter) -> Vec<&'a Project> {
    catalog.iter().filter(|p| filter.matches(p)).collect()
}

#[derive(Debug, Clone)]
pub struct Gallery {
    filter: Filter,
    cards: Vec<CardView>,
    renders: u64,
}

impl Gallery {
    /// Build the gallery with every project shown.
    pub fn new(catalog: &Catalog, reveal: &mut RevealTracker) -> Self {
        let mut gallery = Self {
            filter: Filter::All,
            cards: Vec::new(),
            renders: 0,
        };
        gallery.render(catalog, reveal);
        gallery
    }

    /// Switch filter and re-render.
    pub fn apply_filter(&mut self, catalog: &Catalog, filter: Filter, reveal: &mut RevealTracker) {
        self.filter = filter;
        self.render(catalog, reveal);
    }

    fn render(&mut self, catalog: &Catalog, reveal: &mut RevealTracker) {
        self.cards = select(catalog, &self.filter)
            .into_iter()
            .map(CardView::from)
            .collect();
        self.renders += 1;
        reveal.reregister(CARD_REVEAL_PREFIX, self.cards.iter().map(CardView::reveal_key));
        log::debug!(
            "Gallery rendered: filter={} cards={}",
            self.filter.keyword(),
            self.cards.len()
        );
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    /// Number of times the card list has been rebuilt.
    pub fn renders(&self) -> u64 {
        self.renders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_project;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            sample_project("a", &["ml", "nlp"]),
            sample_project("b", &["ml"]),
            sample_project("c", &["analytics"]),
            sample_project("d", &["automation", "analytics"]),
        ])
        .unwrap()
    }

    fn ids(g: &Gallery) -> Vec<&str> {
        g.cards().iter().map(|c| c.project_id.as_str()).collect()
    }

    #[test]
    fn filter_output_matches_definition_for_every_keyword() {
        let catalog = Catalog::builtin().unwrap();
        let mut keywords: Vec<&str> = FILTERS.iter().map(|(k, _)| *k).collect();
        keywords.push("unknown-category");
        for k in keywords {
            let filter = Filter::from_keyword(k);
            let got: Vec<&str> = select(&catalog, &filter).iter().map(|p| p.id.as_str()).collect();
            let want: Vec<&str> = catalog
                .iter()
                .filter(|p| k == FILTER_ALL || p.categories.iter().any(|c| c == k))
                .map(|p| p.id.as_str())
                .collect();
            assert_eq!(got, want, "keyword {}", k);
        }
    }

    #[test]
    fn builtin_category_counts() {
        let catalog = Catalog::builtin().unwrap();
        let count = |k: &str| select(&catalog, &Filter::from_keyword(k)).len();
        assert_eq!(count("all"), 7);
        assert_eq!(count("ml"), 2);
        assert_eq!(count("nlp"), 1);
        assert_eq!(count("analytics"), 3);
        assert_eq!(count("automation"), 3);
    }

    #[test]
    fn gallery_starts_with_all_and_rerenders() {
        let catalog = catalog();
        let mut reveal = RevealTracker::new(0.3);
        let mut gallery = Gallery::new(&catalog, &mut reveal);
        assert_eq!(gallery.filter(), &Filter::All);
        assert_eq!(ids(&gallery), vec!["a", "b", "c", "d"]);

        gallery.apply_filter(&catalog, Filter::from_keyword("analytics"), &mut reveal);
        assert_eq!(ids(&gallery), vec!["c", "d"]);
        assert_eq!(gallery.renders(), 2);
    }

    #[test]
    fn rerender_reregisters_cards_as_hidden() {
        let catalog = catalog();
        let mut reveal = RevealTracker::new(0.3);
        reveal.observe_all(["hero"]);
        let mut gallery = Gallery::new(&catalog, &mut reveal);
        assert_eq!(reveal.observed_count(), 5);

        let everywhere = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(10.0, 10.0));
        reveal.update("card:a", everywhere, everywhere);
        assert!(reveal.is_visible("card:a"));

        gallery.apply_filter(&catalog, Filter::from_keyword("ml"), &mut reveal);
        assert!(!reveal.is_visible("card:a"));
        assert!(!reveal.is_observed("card:c"));
        assert!(reveal.is_observed("hero"));
        assert_eq!(reveal.observed_count(), 3);
    }

    #[test]
    fn every_trigger_resolves_to_one_record() {
        let catalog = Catalog::builtin().unwrap();
        let mut reveal = RevealTracker::new(0.3);
        let gallery = Gallery::new(&catalog, &mut reveal);
        for card in gallery.cards() {
            let hits = catalog.iter().filter(|p| p.id == card.project_id).count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn keyword_round_trip() {
        assert_eq!(Filter::from_keyword("all"), Filter::All);
        assert_eq!(Filter::from_keyword("nlp").keyword(), "nlp");
    }
}
