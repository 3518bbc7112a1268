//! Project detail modal.
//!
//! Two states, hidden and shown. Opening looks the project up by identifier
//! and replaces the whole view; closing drops it, so nothing of a previous
//! project can linger.

use crate::catalog::Catalog;

use super::ModalView;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Shown(ModalView),
}

#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the project `id`. Re-opening while shown repopulates in place.
    ///
    /// Unknown identifiers leave the state untouched and return false.
    pub fn open(&mut self, catalog: &Catalog, id: &str) -> bool {
        match catalog.get(id) {
            Some(project) => {
                log::debug!("Modal open: {}", id);
                self.state = ModalState::Shown(ModalView::from(project));
                true
            }
            None => {
                log::warn!("No project with id '{}'", id);
                false
            }
        }
    }

    pub fn close(&mut self) {
        if self.is_shown() {
            log::debug!("Modal closed");
        }
        self.state = ModalState::Hidden;
    }

    /// Escape closes; every other key is ignored.
    pub fn handle_key(&mut self, key: egui::Key) {
        if key == egui::Key::Escape {
            self.close();
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.state, ModalState::Shown(_))
    }

    pub fn view(&self) -> Option<&ModalView> {
        match &self.state {
            ModalState::Shown(view) => Some(view),
            ModalState::Hidden => None,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let modal = ModalController::new();
        assert_eq!(modal.state(), &ModalState::Hidden);
        assert!(modal.view().is_none());
    }

    #[test]
    fn open_populates_every_field() {
        let catalog = Catalog::builtin().unwrap();
        let mut modal = ModalController::new();
        assert!(modal.open(&catalog, "bankruptcy-system"));
        let view = modal.view().unwrap();
        let p = catalog.get("bankruptcy-system").unwrap();
        assert_eq!(view, &ModalView::from(p));
        assert_eq!(view.kpis.len(), 3);
        assert_eq!(view.highlights.len(), 3);
        assert_eq!(view.link, p.link);
    }

    #[test]
    fn open_close_reopen_shows_only_second_project() {
        let catalog = Catalog::builtin().unwrap();
        let mut modal = ModalController::new();
        modal.open(&catalog, "ai-factuality");
        modal.close();
        assert!(!modal.is_shown());
        modal.open(&catalog, "gaming-laptop");
        let q = catalog.get("gaming-laptop").unwrap();
        assert_eq!(modal.state(), &ModalState::Shown(ModalView::from(q)));
    }

    #[test]
    fn reopen_while_shown_replaces_in_place() {
        let catalog = Catalog::builtin().unwrap();
        let mut modal = ModalController::new();
        modal.open(&catalog, "computer-price");
        modal.open(&catalog, "accrual-anomaly");
        assert_eq!(modal.view().unwrap().project_id, "accrual-anomaly");
    }

    #[test]
    fn unknown_id_keeps_state() {
        let catalog = Catalog::builtin().unwrap();
        let mut modal = ModalController::new();
        assert!(!modal.open(&catalog, "missing"));
        assert!(!modal.is_shown());

        modal.open(&catalog, "computer-price");
        assert!(!modal.open(&catalog, "missing"));
        assert_eq!(modal.view().unwrap().project_id, "computer-price");
    }

    #[test]
    fn escape_closes_other_keys_do_not() {
        let catalog = Catalog::builtin().unwrap();
        let mut modal = ModalController::new();
        modal.open(&catalog, "ai-factuality");
        modal.handle_key(egui::Key::Enter);
        assert!(modal.is_shown());
        modal.handle_key(egui::Key::Escape);
        assert!(!modal.is_shown());
        // closing a hidden modal is harmless
        modal.close();
        assert!(!modal.is_shown());
    }
}
