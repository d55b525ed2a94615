/// State of a single automaton site.
///
/// `Inert` is a sink: once a cell is inert it never changes again, and it
/// never counts as a live neighbor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
    Inert = 2,
}

impl CellState {
    /// All states, in ordinal order.
    pub const ALL: [CellState; 3] = [CellState::Dead, CellState::Alive, CellState::Inert];

    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Map an ordinal back to a state. Unknown values decode as `Dead`.
    pub fn from_ordinal(value: u8) -> Self {
        match value {
            1 => CellState::Alive,
            2 => CellState::Inert,
            _ => CellState::Dead,
        }
    }

    /// Successor state given the tally of the Moore neighborhood.
    ///
    /// Out-of-bounds neighbors are absent from `counts` rather than counted
    /// as any particular state.
    pub fn next(self, counts: &StateCounts) -> Self {
        match self {
            // 23/3
            CellState::Alive => {
                if counts.alive < 2 || counts.alive > 3 {
                    CellState::Dead
                } else {
                    CellState::Alive
                }
            }
            CellState::Dead => {
                if counts.alive == 3 {
                    CellState::Alive
                } else {
                    CellState::Dead
                }
            }
            CellState::Inert => CellState::Inert,
        }
    }
}

/// Number of cells in each state, usually over a Moore neighborhood.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StateCounts {
    pub dead: u32,
    pub alive: u32,
    pub inert: u32,
}

impl StateCounts {
    pub fn from_states(states: impl IntoIterator<Item = CellState>) -> Self {
        let mut counts = Self::default();
        for state in states {
            counts.add(state);
        }
        counts
    }

    #[inline]
    pub fn add(&mut self, state: CellState) {
        match state {
            CellState::Dead => self.dead += 1,
            CellState::Alive => self.alive += 1,
            CellState::Inert => self.inert += 1,
        }
    }

    #[inline]
    pub fn get(&self, state: CellState) -> u32 {
        match state {
            CellState::Dead => self.dead,
            CellState::Alive => self.alive,
            CellState::Inert => self.inert,
        }
    }

    pub fn total(&self) -> u32 {
        self.dead + self.alive + self.inert
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(alive: u32, dead: u32, inert: u32) -> StateCounts {
        StateCounts { dead, alive, inert }
    }

    #[test]
    fn alive_survives_with_two_or_three() {
        for n in 0..=8 {
            let next = CellState::Alive.next(&counts(n, 8 - n, 0));
            if n < 2 || n > 3 {
                assert_eq!(next, CellState::Dead, "n={n}");
            } else {
                assert_eq!(next, CellState::Alive, "n={n}");
            }
        }
    }

    #[test]
    fn dead_born_with_exactly_three() {
        for n in 0..=8 {
            let next = CellState::Dead.next(&counts(n, 0, 8 - n));
            let expected = if n == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };
            assert_eq!(next, expected, "n={n}");
        }
    }

    #[test]
    fn inert_is_a_sink() {
        for n in 0..=8 {
            assert_eq!(CellState::Inert.next(&counts(n, 0, 0)), CellState::Inert);
            assert_eq!(CellState::Inert.next(&counts(0, 0, n)), CellState::Inert);
        }
    }

    #[test]
    fn inert_neighbors_are_ignored() {
        // 2 alive + 6 inert: still survives, inert doesn't push it over 3
        assert_eq!(CellState::Alive.next(&counts(2, 0, 6)), CellState::Alive);
        // 3 inert alone never triggers a birth
        assert_eq!(CellState::Dead.next(&counts(0, 5, 3)), CellState::Dead);
    }

    #[test]
    fn ordinals() {
        for state in CellState::ALL {
            assert_eq!(CellState::from_ordinal(state.ordinal()), state);
        }
        assert_eq!(CellState::Dead.ordinal(), 0);
        assert_eq!(CellState::Alive.ordinal(), 1);
        assert_eq!(CellState::Inert.ordinal(), 2);
        assert_eq!(CellState::from_ordinal(7), CellState::Dead);
    }

    #[test]
    fn tally() {
        use CellState::*;
        let c = StateCounts::from_states([Alive, Dead, Inert, Alive, Alive]);
        assert_eq!(c.get(Alive), 3);
        assert_eq!(c.get(Dead), 1);
        assert_eq!(c.get(Inert), 1);
        assert_eq!(c.total(), 5);
    }
}
