//! Reveal-on-scroll tracking.
//!
//! Registered elements start hidden. Once the visible share of an element
//! inside the viewport reaches the threshold it is marked visible for good;
//! scrolling it back out does not hide it again.

use std::collections::HashMap;

use egui::Rect;

/// Share of `element` lying inside `viewport`, in `[0, 1]`.
///
/// A zero-area element counts as fully visible when it touches the viewport.
pub fn intersection_ratio(element: Rect, viewport: Rect) -> f32 {
    let area = element.width().max(0.0) * element.height().max(0.0);
    let overlap = element.intersect(viewport);
    if area <= 0.0 {
        return if viewport.contains(element.min) { 1.0 } else { 0.0 };
    }
    if overlap.width() <= 0.0 || overlap.height() <= 0.0 {
        return 0.0;
    }
    (overlap.width() * overlap.height() / area).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f32,
    observed: HashMap<String, bool>,
}

impl RevealTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            observed: HashMap::new(),
        }
    }

    /// Start observing `keys`. Previously registered keys with the same name
    /// keep their state.
    pub fn observe_all<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            self.observed.entry(key.into()).or_insert(false);
        }
    }

    /// Replace every key whose name starts with `prefix` by a fresh, hidden set.
    ///
    /// Used after a re-render: the old elements are gone, the new ones must
    /// animate in again.
    pub fn reregister<I, S>(&mut self, prefix: &str, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.observed.retain(|k, _| !k.starts_with(prefix));
        for key in keys {
            self.observed.insert(key.into(), false);
        }
    }

    /// Report the current on-screen rect of `key`; returns whether it is
    /// visible. Keys that were never registered are always visible.
    pub fn update(&mut self, key: &str, element: Rect, viewport: Rect) -> bool {
        match self.observed.get_mut(key) {
            None => true,
            Some(visible) => {
                if !*visible && intersection_ratio(element, viewport) >= self.threshold {
                    *visible = true;
                }
                *visible
            }
        }
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.observed.get(key).copied().unwrap_or(true)
    }

    pub fn is_observed(&self, key: &str) -> bool {
        self.observed.contains_key(key)
    }

    pub fn visible_count(&self) -> usize {
        self.observed.values().filter(|v| **v).count()
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }
}
