use std::{
    error::Error,
    thread,
    time::{Duration, Instant},
};

use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng as _;
use tricell::*;

#[derive(Debug, Clone, PartialEq)]
struct Config {
    pub seed: u64,
    pub size: UVec2,
    pub generations: u32,
    pub tick: Duration,
    pub chunk_len: usize,
    pub seed_policy: SeedPolicy,
    pub alive_glyph: char,
    /// Inert cells render like dead ones unless this is changed.
    pub inert_glyph: char,
    pub dead_glyph: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 42,
            size: UVec2::new(64, 24),
            generations: 16,
            tick: Duration::from_millis(500),
            chunk_len: DEFAULT_CHUNK_LEN,
            seed_policy: SeedPolicy::default(),
            alive_glyph: '#',
            inert_glyph: ' ',
            dead_glyph: ' ',
        }
    }
}

impl Config {
    /// `tricell-sim [seed] [generations]`
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, Box<dyn Error>> {
        let mut config = Self::default();
        if let Some(seed) = args.next() {
            config.seed = seed.parse()?;
        }
        if let Some(generations) = args.next() {
            config.generations = generations.parse()?;
        }
        Ok(config)
    }

    fn glyph(&self, state: CellState) -> char {
        match state {
            CellState::Alive => self.alive_glyph,
            CellState::Inert => self.inert_glyph,
            CellState::Dead => self.dead_glyph,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "trace")]
    tracing_subscriber::fmt::init();

    let config = Config::from_args(std::env::args().skip(1))?;

    let prng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut grid = Grid::new_random(config.size, &config.seed_policy, prng)?.with_schedule(
        Schedule::Pool {
            chunk_len: config.chunk_len,
        },
    );

    let mut deadline = Instant::now();
    loop {
        println!("{}", export_txt2(&grid, &config));
        report(&grid);

        if grid.generation() >= config.generations as u64 {
            break;
        }

        deadline += config.tick;
        thread::sleep(deadline.saturating_duration_since(Instant::now()));
        grid.advance();
    }

    Ok(())
}

fn report(grid: &Grid) {
    let pop = grid.population();
    #[cfg(feature = "trace")]
    tracing::info!(
        generation = grid.generation(),
        alive = pop.alive,
        inert = pop.inert,
        dead = pop.dead,
        "tick"
    );
    #[cfg(not(feature = "trace"))]
    println!(
        "generation {}: {} alive, {} inert, {} dead",
        grid.generation(),
        pop.alive,
        pop.inert,
        pop.dead
    );
}

fn export_txt2(grid: &Grid, config: &Config) -> String {
    let cells = grid.cells();
    let mut s = String::with_capacity(cells.len() + grid.rows() as usize);
    let mut i = 0;
    for cell in cells {
        s.push(config.glyph(cell.state));
        i += 1;
        if i == grid.cols() {
            i = 0;
            s.push('\n');
        }
    }
    s
}
