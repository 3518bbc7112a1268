//! Spotlight rotator: cycles headline and lead tag through the catalog on a
//! fixed interval. The first rotation happens on `start`, not one interval
//! later.

use std::time::{Duration, Instant};

use crate::catalog::Catalog;

use super::SpotlightView;

#[derive(Debug, Clone)]
pub struct SpotlightRotator {
    interval: Duration,
    index: usize,
    next_due: Option<Instant>,
    current: Option<SpotlightView>,
}

impl SpotlightRotator {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            index: 0,
            next_due: None,
            current: None,
        }
    }

    /// Rotate immediately and arm the timer.
    pub fn start(&mut self, catalog: &Catalog, now: Instant) -> Option<&SpotlightView> {
        self.rotate(catalog);
        self.next_due = Some(now + self.interval);
        self.current.as_ref()
    }

    /// Show the next project, wrapping at the end of the catalog.
    pub fn rotate(&mut self, catalog: &Catalog) -> Option<&SpotlightView> {
        if catalog.is_empty() {
            return None;
        }
        let project = catalog.at(self.index % catalog.len())?;
        self.current = Some(SpotlightView::from(project));
        self.index += 1;
        self.current.as_ref()
    }

    /// Rotate if the timer is due. Returns whether the view changed.
    ///
    /// Missed ticks are not replayed: after a long stall the rotator advances
    /// once and re-arms from `now`.
    pub fn poll(&mut self, catalog: &Catalog, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        self.rotate(catalog);
        let next = due + self.interval;
        self.next_due = Some(if next <= now { now + self.interval } else { next });
        true
    }

    /// Time left until the next rotation, if the timer is armed.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    pub fn current(&self) -> Option<&SpotlightView> {
        self.current.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.next_due.is_some()
    }
}
