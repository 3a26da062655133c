use log::debug;

use crate::Automaton;

/// A named starting pattern, stored as `(x, y)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

impl Pattern {
    /// Bounding box as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Clears the automaton and places the pattern with its corner at `origin`.
    /// Cells that fall outside the visible area are dropped.
    pub fn stamp(&self, automaton: &mut Automaton, (ox, oy): (usize, usize)) {
        automaton.clear();
        let viewport = automaton.viewport();
        let mut placed = 0;
        for &(x, y) in self.cells {
            let (Some(x), Some(y)) = (ox.checked_add(x), oy.checked_add(y)) else {
                continue;
            };
            if viewport.contains(x, y) {
                automaton.set_cell(x, y, true);
                placed += 1;
            }
        }
        debug!("stamped {} at ({ox}, {oy}), {placed}/{} cells visible", self.name, self.cells.len());
    }

    pub fn stamp_centered(&self, automaton: &mut Automaton) {
        let viewport = automaton.viewport();
        let (w, h) = self.size();
        let origin = (
            viewport.width.saturating_sub(w) / 2,
            viewport.height.saturating_sub(h) / 2,
        );
        self.stamp(automaton, origin);
    }
}

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Boundary, Viewport};

    fn automaton(width: usize, height: usize) -> Automaton {
        Automaton::new(Viewport::new(width, height, 4).unwrap(), Boundary::Clamped)
    }

    #[test]
    fn catalogue_has_no_duplicate_cells() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn gosper_gun_is_36_by_9() {
        let gun = find("gosper glider gun").unwrap();
        assert_eq!(gun.size(), (36, 9));
        assert_eq!(gun.cells.len(), 36);
    }

    #[test]
    fn stamp_replaces_existing_cells() {
        let mut a = automaton(10, 10);
        a.set_cell(9, 9, true);
        find("Blinker").unwrap().stamp(&mut a, (2, 3));
        assert_eq!(a.population(), 3);
        assert!(a.is_alive(2, 3) && a.is_alive(3, 3) && a.is_alive(4, 3));
        assert!(!a.is_alive(9, 9));
    }

    #[test]
    fn stamp_clips_to_visible_area() {
        let mut a = automaton(5, 5);
        find("Blinker").unwrap().stamp(&mut a, (4, 0));
        assert_eq!(a.population(), 1);
        assert_eq!(a.grid().population(), 1);
    }

    #[test]
    fn stamp_far_off_the_grid_places_nothing() {
        let mut a = automaton(5, 5);
        a.set_cell(0, 0, true);
        let glider = find("Glider").unwrap();
        glider.stamp(&mut a, (usize::MAX, 0));
        glider.stamp(&mut a, (1, usize::MAX - 1));
        assert_eq!(a.grid().population(), 0);
    }

    #[test]
    fn pulsar_has_period_three() {
        let mut a = automaton(17, 17);
        let pulsar = find("Pulsar").unwrap();
        pulsar.stamp_centered(&mut a);
        let start = a.grid().clone();
        a.step();
        assert_ne!(a.grid(), &start);
        a.step();
        a.step();
        assert_eq!(a.grid(), &start);
    }

    #[test]
    fn toad_and_beacon_have_period_two() {
        for name in ["Toad", "Beacon"] {
            let mut a = automaton(8, 8);
            find(name).unwrap().stamp_centered(&mut a);
            let start = a.grid().clone();
            a.step();
            assert_ne!(a.grid(), &start, "{name}");
            a.step();
            assert_eq!(a.grid(), &start, "{name}");
        }
    }
}
