use heapless::Vec;

/// Number of rows in our grid
pub const N_ROWS: usize = 3;
/// Number of columns in our grid
pub const N_COLS: usize = 3;
/// Number of cells on the board
pub const CELLS: usize = N_ROWS * N_COLS;
/// Number of cells that must be revealed to win (everything except the mine)
pub const SAFE_CELLS: u8 = (CELLS - 1) as u8;

/// Anything that can hand out random bytes for mine placement.
pub trait MineSource {
    fn next_u8(&mut self) -> u8;
}

impl<T: MineSource + ?Sized> MineSource for &mut T {
    fn next_u8(&mut self) -> u8 {
        (**self).next_u8()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coords {
    pub row: u8,
    pub col: u8,
}

impl Coords {
    /// Coordinates of a linear cell index (`row * 3 + col`).
    pub fn from_index(index: usize) -> Self {
        Coords {
            row: (index / N_COLS) as u8,
            col: (index % N_COLS) as u8,
        }
    }

    pub fn index(&self) -> usize {
        self.row as usize * N_COLS + self.col as usize
    }

    /// Get random coordinates within the grid. The source may produce any byte, so each axis is
    /// reduced modulo the grid size.
    pub fn random<R: MineSource + ?Sized>(rng: &mut R) -> Self {
        Coords {
            row: rng.next_u8() % N_ROWS as u8,
            col: rng.next_u8() % N_COLS as u8,
        }
    }

    /// True if `other` is one of the (up to 8) cells touching this one.
    pub fn is_adjacent(&self, other: &Coords) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// All in-bounds cells touching this one.
    pub fn neighbours(&self) -> Vec<Coords, 8> {
        (0..CELLS)
            .map(Coords::from_index)
            .filter(|other| self.is_adjacent(other))
            .collect()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    Unrevealed,
    /// Revealed, and no neighbour holds the mine.
    SafeNoAdjacentMine,
    /// Revealed, and a neighbour holds the mine.
    SafeAdjacentToMine,
    /// The mine, revealed by the move that lost the round.
    Mine,
}

impl CellState {
    pub fn is_revealed(self) -> bool {
        self != CellState::Unrevealed
    }
}

/// What happened when a cell was revealed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Reveal {
    Clear,
    Adjacent,
    Mine,
}

/// The 3x3 grid and the hidden mine.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [CellState; CELLS],
    mine: Coords,
    revealed: u8,
}

impl Board {
    pub fn new(mine: Coords) -> Self {
        Board {
            cells: [CellState::Unrevealed; CELLS],
            mine,
            revealed: 0,
        }
    }

    pub fn mine(&self) -> Coords {
        self.mine
    }

    pub fn cell(&self, index: usize) -> CellState {
        self.cells[index]
    }

    /// Number of cells no longer [`CellState::Unrevealed`].
    pub fn revealed(&self) -> u8 {
        self.revealed
    }

    /// True once every cell except the mine has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.revealed >= SAFE_CELLS
    }

    /// Classify a cell without touching the board.
    pub fn classify(&self, coords: Coords) -> Reveal {
        if coords == self.mine {
            Reveal::Mine
        } else if self.mine.neighbours().contains(&coords) {
            Reveal::Adjacent
        } else {
            Reveal::Clear
        }
    }

    /// Reveal a cell, recording its state. Revealing an already revealed cell changes nothing.
    pub fn reveal(&mut self, coords: Coords) -> Reveal {
        let reveal = self.classify(coords);
        let cell = &mut self.cells[coords.index()];
        if *cell == CellState::Unrevealed {
            *cell = match reveal {
                Reveal::Clear => CellState::SafeNoAdjacentMine,
                Reveal::Adjacent => CellState::SafeAdjacentToMine,
                Reveal::Mine => CellState::Mine,
            };
            self.revealed += 1;
        }
        reveal
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Per-round bookkeeping alongside the [`Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RoundState {
    /// Full blink period, sampled once at the start of the round.
    pub blink_period: u32,
    /// Round time, captured when the round ended.
    pub elapsed_ticks: u32,
    pub outcome: Outcome,
}

impl RoundState {
    pub fn new(blink_period: u32) -> Self {
        RoundState {
            blink_period,
            elapsed_ticks: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Length of one colour phase.
    pub fn half_period(&self) -> u32 {
        self.blink_period / 2
    }
}
