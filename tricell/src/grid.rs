use glam::{IVec2, UVec2};
use rand::{Rng, RngCore};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{Cell, CellState, Error, StateCounts};

/// Moore neighborhood offsets, x-major then y, both ascending.
const MOORE: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(-1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, -1),
    IVec2::new(0, 1),
    IVec2::new(1, -1),
    IVec2::new(1, 0),
    IVec2::new(1, 1),
];

/// Cells per work item when advancing on the thread pool.
pub const DEFAULT_CHUNK_LEN: usize = 1024;

/// Probability thresholds used to seed a grid.
///
/// For each cell a uniform `r` in `[0, 1)` is drawn. `r > alive_above` gives
/// `Alive`, otherwise `r < inert_below` gives `Inert`, otherwise `Dead`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedPolicy {
    pub alive_above: f32,
    pub inert_below: f32,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            alive_above: 0.7,
            inert_below: 0.05,
        }
    }
}

impl SeedPolicy {
    #[inline]
    pub fn pick(&self, r: f32) -> CellState {
        if r > self.alive_above {
            CellState::Alive
        } else if r < self.inert_below {
            CellState::Inert
        } else {
            CellState::Dead
        }
    }
}

/// How [`Grid::advance()`] spreads work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Evaluate every cell on the calling thread.
    Serial,
    /// Split the output buffer into `chunk_len`-cell ranges and evaluate them
    /// on the rayon pool. Falls back to serial without the `parallel` feature.
    Pool { chunk_len: usize },
}

impl Default for Schedule {
    fn default() -> Self {
        if cfg!(feature = "parallel") {
            Self::Pool {
                chunk_len: DEFAULT_CHUNK_LEN,
            }
        } else {
            Self::Serial
        }
    }
}

/// Fixed-size 2D automaton, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: UVec2,
    cells: Vec<Cell>,
    generation: u64,
    schedule: Schedule,
}

impl Grid {
    /// Create an all-`Dead` grid of `size.x` columns by `size.y` rows.
    pub fn new(size: UVec2) -> Result<Self, Error> {
        if size.x == 0 || size.y == 0 {
            return Err(Error::EmptyGrid {
                cols: size.x,
                rows: size.y,
            });
        }
        let too_large = Error::TooLarge {
            cols: size.x,
            rows: size.y,
        };
        if size.x > i32::MAX as u32 || size.y > i32::MAX as u32 {
            return Err(too_large);
        }
        let capacity = (size.x as usize)
            .checked_mul(size.y as usize)
            .ok_or(too_large)?;

        let mut cells = Vec::with_capacity(capacity);
        for y in 0..size.y as i32 {
            for x in 0..size.x as i32 {
                cells.push(Cell::new(IVec2::new(x, y), CellState::Dead));
            }
        }

        Ok(Self {
            size,
            cells,
            generation: 0,
            schedule: Schedule::default(),
        })
    }

    /// Create a grid seeded from `prng` with `policy`.
    pub fn new_random(
        size: UVec2,
        policy: &SeedPolicy,
        prng: impl RngCore,
    ) -> Result<Self, Error> {
        let mut grid = Self::new(size)?;
        grid.fill_rand(policy, prng);
        Ok(grid)
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn set_schedule(&mut self, schedule: Schedule) {
        self.schedule = schedule;
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Re-seed every cell independently and reset the generation counter.
    pub fn fill_rand(&mut self, policy: &SeedPolicy, mut prng: impl RngCore) {
        #[cfg(feature = "trace")]
        let _span = tracing::info_span!("fill_rand").entered();

        for cell in &mut self.cells {
            let r: f32 = prng.gen_range(0.0..1.0);
            cell.state = policy.pick(r);
        }
        self.generation = 0;
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        self.size
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.size.x
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.size.y
    }

    /// Number of completed [`advance()`](Self::advance) calls since seeding.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current generation, row-major (`index = y * cols + x`).
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, pos: IVec2) -> Option<Cell> {
        index_of(self.size, pos).map(|index| self.cells[index])
    }

    /// Overwrite the state at `pos`, returning the previous one, or `None` if
    /// `pos` is out of bounds.
    pub fn set_state(&mut self, pos: IVec2, state: CellState) -> Option<CellState> {
        let index = index_of(self.size, pos)?;
        let previous = self.cells[index].state;
        self.cells[index].state = state;
        Some(previous)
    }

    /// In-bounds Moore neighbors of `pos`. Fewer than 8 on edges and corners.
    pub fn neighbors(&self, pos: IVec2) -> impl Iterator<Item = Cell> + '_ {
        neighbors_in(self.size, &self.cells, pos)
    }

    pub fn neighbor_counts(&self, pos: IVec2) -> StateCounts {
        StateCounts::from_states(self.neighbors(pos).map(|cell| cell.state))
    }

    /// Totals of each state over the whole grid.
    pub fn population(&self) -> StateCounts {
        StateCounts::from_states(self.cells.iter().map(|cell| cell.state))
    }

    /// Positions of all `Alive` cells, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .map(|cell| cell.pos)
    }

    /// Step to the next generation.
    ///
    /// Every cell is evaluated against the current cells only; results go to
    /// a separate buffer which replaces `cells` once all of them are done.
    pub fn advance(&mut self) {
        #[cfg(feature = "trace")]
        let _span = tracing::info_span!("advance", generation = self.generation).entered();

        let size = self.size;
        let snapshot = &self.cells[..];
        let mut next = vec![Cell::default(); snapshot.len()];
        match self.schedule {
            Schedule::Serial => step_range(size, snapshot, 0, &mut next),
            Schedule::Pool { chunk_len } => {
                let chunk_len = chunk_len.max(1);
                #[cfg(feature = "parallel")]
                next.par_chunks_mut(chunk_len)
                    .enumerate()
                    .for_each(|(i, out)| step_range(size, snapshot, i * chunk_len, out));
                #[cfg(not(feature = "parallel"))]
                next.chunks_mut(chunk_len)
                    .enumerate()
                    .for_each(|(i, out)| step_range(size, snapshot, i * chunk_len, out));
            }
        }

        self.cells = next;
        self.generation += 1;
    }
}

#[inline]
fn index_of(size: UVec2, pos: IVec2) -> Option<usize> {
    if pos.x < 0 || pos.y < 0 || pos.x as u32 >= size.x || pos.y as u32 >= size.y {
        None
    } else {
        Some(pos.y as usize * size.x as usize + pos.x as usize)
    }
}

fn neighbors_in(size: UVec2, cells: &[Cell], pos: IVec2) -> impl Iterator<Item = Cell> + '_ {
    MOORE
        .iter()
        .filter_map(move |offset| index_of(size, pos + *offset).map(|index| cells[index]))
}

/// Compute the successors of `snapshot[start..start + out.len()]` into `out`.
fn step_range(size: UVec2, snapshot: &[Cell], start: usize, out: &mut [Cell]) {
    for (slot, cell) in out.iter_mut().zip(&snapshot[start..]) {
        let counts =
            StateCounts::from_states(neighbors_in(size, snapshot, cell.pos).map(|n| n.state));
        *slot = cell.with_state(cell.state.next(&counts));
    }
}
