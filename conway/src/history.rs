use std::collections::hash_map::DefaultHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use crate::Automaton;

const HISTORY_LEN: usize = 10;

/// Remembers hashes of recent visible generations to spot still lifes and
/// short oscillators.
#[derive(Clone, Debug, Default)]
pub struct CycleDetector {
    history: VecDeque<u64>,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the automaton's visible state. Returns true if it matches one of
    /// the last `HISTORY_LEN` observed states.
    pub fn observe(&mut self, automaton: &Automaton) -> bool {
        let hash = hash_visible(automaton);
        if self.history.contains(&hash) {
            return true;
        }
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(hash);
        false
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

fn hash_visible(automaton: &Automaton) -> u64 {
    let viewport = automaton.viewport();
    let mut hasher = DefaultHasher::new();
    for y in 0..viewport.height {
        for x in 0..viewport.width {
            automaton.is_alive(x, y).hash(&mut hasher);
        }
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{patterns, Boundary, Viewport};

    fn automaton() -> Automaton {
        Automaton::new(Viewport::new(12, 12, 4).unwrap(), Boundary::Clamped)
    }

    #[test]
    fn still_life_is_a_cycle() {
        let mut a = automaton();
        for (x, y) in [(5, 5), (6, 5), (5, 6), (6, 6)] {
            a.set_cell(x, y, true);
        }
        let mut detector = CycleDetector::new();
        assert!(!detector.observe(&a));
        a.step();
        assert!(detector.observe(&a));
    }

    #[test]
    fn blinker_repeats_after_two_steps() {
        let mut a = automaton();
        patterns::find("Blinker").unwrap().stamp_centered(&mut a);
        let mut detector = CycleDetector::new();
        assert!(!detector.observe(&a));
        a.step();
        assert!(!detector.observe(&a));
        a.step();
        assert!(detector.observe(&a));
    }

    #[test]
    fn glider_in_open_space_is_not_a_cycle() {
        let mut a = Automaton::new(Viewport::new(30, 30, 4).unwrap(), Boundary::Clamped);
        patterns::find("Glider").unwrap().stamp(&mut a, (1, 1));
        let mut detector = CycleDetector::new();
        for _ in 0..20 {
            assert!(!detector.observe(&a));
            a.step();
        }
    }

    #[test]
    fn reset_forgets_history() {
        let a = automaton();
        let mut detector = CycleDetector::new();
        detector.observe(&a);
        detector.reset();
        assert!(!detector.observe(&a));
    }
}
