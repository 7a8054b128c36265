use rand::Rng;
use std::mem;

/// Row-major cell matrix, indexed `grid[y][x]`.
pub type Grid<const W: usize, const H: usize> = [[bool; W]; H];

// Moore neighbourhood, row above first
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Conway's rule: survival on 2 or 3 neighbours, birth on exactly 3.
pub fn next_state(alive: bool, neighbors: usize) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Neighbour coordinates of `(x, y)` that lie on a `W` x `H` grid. There is
/// no wraparound, so corners get 3 and edges 5.
pub fn neighbor_positions<const W: usize, const H: usize>(
    x: usize,
    y: usize,
) -> impl Iterator<Item = (usize, usize)> {
    OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < W && ny < H).then_some((nx, ny))
    })
}

pub fn live_neighbors<const W: usize, const H: usize>(
    grid: &Grid<W, H>,
    x: usize,
    y: usize,
) -> usize {
    neighbor_positions::<W, H>(x, y)
        .filter(|&(nx, ny)| grid[ny][nx])
        .count()
}

/// Double-buffered Life board. `step` reads only `current` and writes every
/// cell of `next`, then the two buffers trade places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<const W: usize, const H: usize> {
    current: Grid<W, H>,
    next: Grid<W, H>,
    generation: u64,
}

impl<const W: usize, const H: usize> Default for Board<W, H> {
    fn default() -> Self {
        Self {
            current: [[false; W]; H],
            next: [[false; W]; H],
            generation: 0,
        }
    }
}

impl<const W: usize, const H: usize> Board<W, H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with the given `(x, y)` cells alive. Coordinates off the grid
    /// are dropped.
    pub fn from_cells(cells: &[(usize, usize)]) -> Self {
        let mut board = Self::new();
        for &(x, y) in cells {
            board.set(x, y, true);
        }
        board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.current.get(y)?.get(x).copied()
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if let Some(cell) = self.current.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = alive;
        }
    }

    /// Flips one cell and returns its new state, or `None` off the grid.
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<bool> {
        let cell = self.current.get_mut(y)?.get_mut(x)?;
        *cell = !*cell;
        Some(*cell)
    }

    pub fn live_neighbors(&self, x: usize, y: usize) -> usize {
        live_neighbors(&self.current, x, y)
    }

    pub fn neighbor_positions(
        &self,
        x: usize,
        y: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        neighbor_positions::<W, H>(x, y)
    }

    pub fn step(&mut self) {
        for y in 0..H {
            for x in 0..W {
                let neighbors = live_neighbors(&self.current, x, y);
                self.next[y][x] = next_state(self.current[y][x], neighbors);
            }
        }
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.current = [[false; W]; H];
        self.generation = 0;
    }

    /// Refills the board, each cell alive with probability `density`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        for row in self.current.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.gen_bool(density);
            }
        }
        self.generation = 0;
    }

    pub fn population(&self) -> usize {
        self.current.iter().flatten().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    /// Every cell as `(x, y, alive)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.current
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(x, &alive)| (x, y, alive))
            })
    }

    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}
