//! Count-up animation for headline numbers.
//!
//! A counter climbs from 0 to its target in integer steps of
//! `max(1, round(target / frames))`, one step per animation frame. Targets
//! above 10 are shown as percentages, smaller ones with a trailing `+`.

use crate::catalog::data::HeroStat;

/// Step size for a counter that should finish in about `frames` frames.
pub fn counter_step(target: u32, frames: u32) -> u32 {
    let frames = frames.max(1) as f64;
    ((target as f64 / frames).round() as u32).max(1)
}

/// Display text for `current` on its way to `target`.
pub fn format_count(current: u32, target: u32) -> String {
    let suffix = if target > 10 { '%' } else { '+' };
    format!("{}{}", current, suffix)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u32,
    current: u32,
    step: u32,
    text: String,
}

impl CounterAnimation {
    /// Create the counter and run its first tick immediately.
    pub fn start(target: u32, frames: u32) -> Self {
        let mut counter = Self {
            target,
            current: 0,
            step: counter_step(target, frames),
            text: String::new(),
        };
        counter.tick();
        counter
    }

    /// Advance one frame. No-op once the target is reached.
    pub fn tick(&mut self) -> &str {
        if self.text.is_empty() || !self.is_done() {
            self.current = self.target.min(self.current.saturating_add(self.step));
            self.text = format_count(self.current, self.target);
        }
        &self.text
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }
}

/// The set of labelled counters shown together on the home page.
#[derive(Debug, Clone, Default)]
pub struct CounterBoard {
    counters: Vec<(&'static str, CounterAnimation)>,
}

impl CounterBoard {
    pub fn start(stats: &[HeroStat], frames: u32) -> Self {
        Self {
            counters: stats
                .iter()
                .map(|s| (s.label, CounterAnimation::start(s.target, frames)))
                .collect(),
        }
    }

    /// Tick every unfinished counter. Returns true while any is still running.
    pub fn tick_all(&mut self) -> bool {
        let mut running = false;
        for (_, c) in &mut self.counters {
            if !c.is_done() {
                c.tick();
                running |= !c.is_done();
            }
        }
        running
    }

    pub fn is_done(&self) -> bool {
        self.counters.iter().all(|(_, c)| c.is_done())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CounterAnimation)> {
        self.counters.iter().map(|(label, c)| (*label, c))
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(target: u32) -> Vec<String> {
        let mut c = CounterAnimation::start(target, 60);
        let mut seen = vec![c.text().to_string()];
        let mut guard = 0;
        while !c.is_done() {
            seen.push(c.tick().to_string());
            guard += 1;
            assert!(guard < 10_000);
        }
        seen
    }

    #[test]
    fn step_rounds_and_floors_at_one() {
        assert_eq!(counter_step(85, 60), 1);
        assert_eq!(counter_step(5, 60), 1);
        assert_eq!(counter_step(90, 60), 2); // 1.5 rounds up
        assert_eq!(counter_step(600, 60), 10);
        assert_eq!(counter_step(0, 60), 1);
    }

    #[test]
    fn percent_counter_climbs_by_one_to_target() {
        let seen = run_to_end(85);
        assert_eq!(seen.len(), 85);
        assert_eq!(seen.first().map(String::as_str), Some("1%"));
        assert_eq!(seen.last().map(String::as_str), Some("85%"));
        let values: Vec<u32> = seen
            .iter()
            .map(|s| s.trim_end_matches('%').parse().unwrap())
            .collect();
        for w in values.windows(2) {
            assert_eq!(w[1], w[0] + 1);
        }
    }

    #[test]
    fn small_counter_uses_plus_suffix() {
        let seen = run_to_end(5);
        assert_eq!(seen, vec!["1+", "2+", "3+", "4+", "5+"]);
    }

    #[test]
    fn overshooting_step_is_clamped() {
        let mut c = CounterAnimation::start(125, 60); // step 2
        while !c.is_done() {
            c.tick();
        }
        assert_eq!(c.current(), 125);
        assert_eq!(c.text(), "125%");
    }

    #[test]
    fn finished_counter_stays_put() {
        let mut c = CounterAnimation::start(1, 60);
        assert!(c.is_done());
        assert_eq!(c.tick(), "1+");
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn zero_target_shows_zero() {
        let c = CounterAnimation::start(0, 60);
        assert!(c.is_done());
        assert_eq!(c.text(), "0+");
    }

    #[test]
    fn board_runs_until_all_done() {
        let stats = [
            HeroStat { label: "a", target: 3 },
            HeroStat { label: "b", target: 12 },
        ];
        let mut board = CounterBoard::start(&stats, 60);
        assert_eq!(board.len(), 2);
        let mut frames = 0;
        while board.tick_all() {
            frames += 1;
        }
        assert!(board.is_done());
        assert_eq!(frames, 10);
        let texts: Vec<&str> = board.iter().map(|(_, c)| c.text()).collect();
        assert_eq!(texts, vec!["3+", "12%"]);
    }
}
