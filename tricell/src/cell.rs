use glam::IVec2;

use crate::CellState;

/// One automaton site. Coordinates are fixed at grid construction; a new
/// value replaces the old one on every generation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub pos: IVec2,
    pub state: CellState,
}

impl Cell {
    #[inline]
    pub fn new(pos: IVec2, state: CellState) -> Self {
        Self { pos, state }
    }

    /// `(x, y, ordinal)` tuple consumed by renderers.
    #[inline]
    pub fn draw_state(&self) -> (i32, i32, u8) {
        (self.pos.x, self.pos.y, self.state.ordinal())
    }

    /// Same site, different state.
    #[inline]
    pub fn with_state(self, state: CellState) -> Self {
        Self { state, ..self }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state == CellState::Alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_state() {
        let cell = Cell::new(IVec2::new(4, 7), CellState::Inert);
        assert_eq!(cell.draw_state(), (4, 7, 2));
        let next = cell.with_state(CellState::Alive);
        assert_eq!(next.pos, cell.pos);
        assert!(next.is_alive());
    }
}
